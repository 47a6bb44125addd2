use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Felicitation {
    pub id: String,
    pub guest_token: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Felicitation {
    pub fn new(guest_token: String, name: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            guest_token,
            name,
            message,
            created_at: Utc::now(),
        }
    }
}
