use serde::Deserialize;

// Every field is optional so that missing input is reported with the
// application's own 400 message instead of a deserialization rejection.

#[derive(Deserialize)]
pub struct RsvpRequest {
    pub token: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct FelicitationQuery {
    pub token: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateFelicitationRequest {
    pub token: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct WeddingQuery {
    pub slug: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGuestRequest {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub unique_url: Option<String>,
    pub rsvp_deadline: Option<String>,
    pub token: Option<String>,
}

/// Absent fields are left alone; an empty string clears the optional ones.
#[derive(Deserialize)]
pub struct UpdateGuestRequest {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub mesa: Option<String>,
    pub unique_url: Option<String>,
    pub rsvp_deadline: Option<String>,
}
