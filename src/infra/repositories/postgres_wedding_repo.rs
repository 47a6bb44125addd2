use crate::domain::{models::wedding::{Wedding, WeddingData}, ports::WeddingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const DATA_COLUMNS: &str = "id, wedding_id, bride, groom, date, day_of_week, time, venue, rsvp_numbers_json, invitation_text, ceremony_types_json, wedding_program_json, design_elements_json, created_at";

pub struct PostgresWeddingRepo {
    pool: PgPool,
}

impl PostgresWeddingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeddingRepository for PostgresWeddingRepo {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Wedding>, AppError> {
        sqlx::query_as::<_, Wedding>(
            "SELECT id, slug, created_at FROM weddings WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_data_by_wedding_id(&self, wedding_id: &str) -> Result<Option<WeddingData>, AppError> {
        sqlx::query_as::<_, WeddingData>(&format!(
            "SELECT {} FROM wedding_data WHERE wedding_id = $1 ORDER BY created_at DESC LIMIT 1",
            DATA_COLUMNS
        ))
            .bind(wedding_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_latest_data(&self) -> Result<Option<WeddingData>, AppError> {
        sqlx::query_as::<_, WeddingData>(&format!(
            "SELECT {} FROM wedding_data ORDER BY created_at DESC LIMIT 1",
            DATA_COLUMNS
        ))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
