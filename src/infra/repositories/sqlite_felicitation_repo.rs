use crate::domain::{models::felicitation::Felicitation, ports::FelicitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFelicitationRepo {
    pool: SqlitePool,
}

impl SqliteFelicitationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FelicitationRepository for SqliteFelicitationRepo {
    async fn create(&self, felicitation: &Felicitation) -> Result<Felicitation, AppError> {
        sqlx::query_as::<_, Felicitation>(
            "INSERT INTO felicitations (id, guest_token, name, message, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, guest_token, name, message, created_at",
        )
            .bind(&felicitation.id)
            .bind(&felicitation.guest_token)
            .bind(&felicitation.name)
            .bind(&felicitation.message)
            .bind(felicitation.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Felicitation>, AppError> {
        sqlx::query_as::<_, Felicitation>(
            "SELECT id, guest_token, name, message, created_at FROM felicitations ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
