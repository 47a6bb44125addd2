use crate::domain::models::{
    felicitation::Felicitation, guest::Guest, wedding::{Wedding, WeddingData},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Guest>, AppError>;
    async fn find_by_unique_url(&self, unique_url: &str) -> Result<Option<Guest>, AppError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Guest>, AppError>;
    /// Writes the admin-editable fields. Never touches `token` or `status`.
    async fn update(&self, guest: &Guest) -> Result<Guest, AppError>;
    /// Unconditional write of `status` and `updated_at`; last write wins.
    async fn update_status(&self, token: &str, status: &str, updated_at: DateTime<Utc>) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait FelicitationRepository: Send + Sync {
    async fn create(&self, felicitation: &Felicitation) -> Result<Felicitation, AppError>;
    /// Every guest's messages, newest first.
    async fn list(&self) -> Result<Vec<Felicitation>, AppError>;
}

#[async_trait]
pub trait WeddingRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Wedding>, AppError>;
    async fn find_data_by_wedding_id(&self, wedding_id: &str) -> Result<Option<WeddingData>, AppError>;
    async fn find_latest_data(&self) -> Result<Option<WeddingData>, AppError>;
}
