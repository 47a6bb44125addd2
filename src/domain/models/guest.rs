use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::FromRow;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub const TOKEN_PREFIX: &str = "guest_";
const TOKEN_SUFFIX_LEN: usize = 9;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub id: String,
    pub token: String,
    pub unique_url: String,
    pub nome: String,
    pub telefone: String,
    pub email: Option<String>,
    pub status: String, // pending, confirmed, rejected
    pub mesa: Option<String>,
    pub rsvp_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Builds a pending guest. A missing token is generated, and a missing
    /// unique URL falls back to the token.
    pub fn new(
        nome: String,
        telefone: String,
        email: Option<String>,
        token: Option<String>,
        unique_url: Option<String>,
        rsvp_deadline: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        let token = token.unwrap_or_else(generate_token);
        let unique_url = unique_url.unwrap_or_else(|| token.clone());

        Self {
            id: Uuid::new_v4().to_string(),
            token,
            unique_url,
            nome,
            telefone,
            email,
            status: RsvpStatus::Pending.to_string(),
            mesa: None,
            rsvp_deadline,
            created_at: now,
            updated_at: now,
        }
    }

    /// Expired once the deadline is strictly in the past.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.rsvp_deadline.is_some_and(|deadline| deadline < now)
    }
}

/// `guest_<unix millis>_<9 lowercase alphanumerics>`. Unique in practice, not
/// unguessable.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..TOKEN_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..36u8);
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'a' + idx - 10) as char
            }
        })
        .collect();

    format!("{}{}_{}", TOKEN_PREFIX, Utc::now().timestamp_millis(), suffix)
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM` (taken as UTC) or a bare date, which
/// means the end of that day.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Pending => "pending",
            RsvpStatus::Confirmed => "confirmed",
            RsvpStatus::Rejected => "rejected",
        }
    }

    /// Only confirmed and rejected can be requested by a guest.
    pub fn parse_answer(raw: &str) -> Option<Self> {
        match raw.parse::<RsvpStatus>() {
            Ok(status @ (RsvpStatus::Confirmed | RsvpStatus::Rejected)) => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RsvpStatus::Pending),
            "confirmed" => Ok(RsvpStatus::Confirmed),
            "rejected" => Ok(RsvpStatus::Rejected),
            _ => Err(()),
        }
    }
}
