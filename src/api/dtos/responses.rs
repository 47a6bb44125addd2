use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::models::{felicitation::Felicitation, guest::Guest};

/// What a guest-facing page gets to see about an invitation.
#[derive(Serialize)]
pub struct GuestView {
    pub id: String,
    pub nome: String,
    pub email: Option<String>,
    pub status: String,
    pub mesa: Option<String>,
    pub unique_url: String,
    pub token: String,
    pub rsvp_deadline: Option<DateTime<Utc>>,
}

impl From<Guest> for GuestView {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            nome: guest.nome,
            email: guest.email,
            status: guest.status,
            mesa: guest.mesa,
            unique_url: guest.unique_url,
            token: guest.token,
            rsvp_deadline: guest.rsvp_deadline,
        }
    }
}

#[derive(Serialize)]
pub struct GuestByTokenResponse {
    pub convidado: GuestView,
}

#[derive(Serialize)]
pub struct ExpiredInvitationResponse {
    pub error: String,
    pub convidado: GuestView,
}

#[derive(Serialize)]
pub struct GuestByUrlResponse {
    pub guest: GuestView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Serialize)]
pub struct RsvpResponse {
    pub message: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct FelicitationEntry {
    pub id: String,
    pub name: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl From<Felicitation> for FelicitationEntry {
    fn from(f: Felicitation) -> Self {
        Self {
            id: f.id,
            name: f.name,
            message: f.message,
            date: f.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct FelicitationCreatedResponse {
    pub message: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct GuestListResponse {
    pub guests: Vec<Guest>,
}

#[derive(Serialize)]
pub struct GuestSavedResponse {
    pub message: String,
    pub guest: Guest,
}

#[derive(Serialize, Default)]
pub struct GuestSummaryResponse {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub rejected: usize,
    pub seated: usize,
}
