use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    models::{felicitation::Felicitation, guest::{Guest, RsvpStatus}},
    ports::{FelicitationRepository, GuestRepository},
};
use crate::error::AppError;

/// Outcome of looking a guest up. An expired invitation is still a
/// successful lookup; callers decide how loudly to warn.
#[derive(Debug, Clone)]
pub enum Resolution {
    Active(Guest),
    Expired(Guest),
}

impl Resolution {
    fn classify(guest: Guest, now: DateTime<Utc>) -> Self {
        if guest.is_expired_at(now) {
            Resolution::Expired(guest)
        } else {
            Resolution::Active(guest)
        }
    }

    pub fn guest(&self) -> &Guest {
        match self {
            Resolution::Active(guest) | Resolution::Expired(guest) => guest,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Resolution::Expired(_))
    }
}

/// Guest-scoped operations keyed by the invitation token: lookups, RSVP
/// answers and the felicitation ledger.
pub struct InvitationService {
    guests: Arc<dyn GuestRepository>,
    felicitations: Arc<dyn FelicitationRepository>,
}

impl InvitationService {
    pub fn new(guests: Arc<dyn GuestRepository>, felicitations: Arc<dyn FelicitationRepository>) -> Self {
        Self { guests, felicitations }
    }

    pub async fn resolve_by_token(&self, token: &str) -> Result<Resolution, AppError> {
        let token = required(token, "Token é obrigatório")?;
        let guest = self.guests.find_by_token(token).await?
            .ok_or_else(AppError::guest_not_found)?;

        Ok(Resolution::classify(guest, Utc::now()))
    }

    pub async fn resolve_by_unique_url(&self, unique_url: &str) -> Result<Resolution, AppError> {
        let unique_url = required(unique_url, "Identificador do convidado é obrigatório")?;
        let guest = self.guests.find_by_unique_url(unique_url).await?
            .ok_or_else(AppError::guest_not_found)?;

        Ok(Resolution::classify(guest, Utc::now()))
    }

    /// Check-then-write without a transaction. Any answer may replace any
    /// previous one and `updated_at` moves on every call.
    pub async fn record_rsvp(&self, token: &str, status: RsvpStatus) -> Result<RsvpStatus, AppError> {
        let token = required(token, "Token é obrigatório")?;
        if status == RsvpStatus::Pending {
            return Err(AppError::Validation("Status inválido".into()));
        }

        let guest = self.guests.find_by_token(token).await?
            .ok_or_else(AppError::guest_not_found)?;

        self.guests.update_status(&guest.token, status.as_str(), Utc::now()).await?;
        info!(guest_id = %guest.id, from = %guest.status, to = %status, "RSVP recorded");

        Ok(status)
    }

    /// The signing name is free text and need not match the guest's name.
    pub async fn append_felicitation(&self, token: &str, name: &str, message: &str) -> Result<Felicitation, AppError> {
        let token = required(token, "Token é obrigatório")?;
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() || message.is_empty() {
            return Err(AppError::Validation("Nome e mensagem são obrigatórios".into()));
        }

        let guest = self.guests.find_by_token(token).await?
            .ok_or_else(AppError::guest_not_found)?;

        let felicitation = Felicitation::new(guest.token, name.to_string(), message.to_string());
        let created = self.felicitations.create(&felicitation).await?;
        info!(felicitation_id = %created.id, "Felicitation appended");

        Ok(created)
    }

    /// Any valid token unlocks the whole ledger.
    pub async fn list_felicitations(&self, token: &str) -> Result<Vec<Felicitation>, AppError> {
        let token = required(token, "Token é obrigatório")?;
        self.guests.find_by_token(token).await?
            .ok_or_else(AppError::guest_not_found)?;

        self.felicitations.list().await
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(value)
}
