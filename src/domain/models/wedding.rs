use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Wedding {
    pub id: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Ceremony and branding configuration for one wedding. The `*_json`
/// columns hold raw JSON documents written by the administration tooling.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WeddingData {
    pub id: String,
    pub wedding_id: String,
    pub bride: String,
    pub groom: String,
    pub date: String,
    pub day_of_week: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub rsvp_numbers_json: Option<String>,
    pub invitation_text: Option<String>,
    pub ceremony_types_json: Option<String>,
    pub wedding_program_json: Option<String>,
    pub design_elements_json: Option<String>,
    pub created_at: DateTime<Utc>,
}
