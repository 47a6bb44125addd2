use crate::domain::{models::guest::Guest, ports::GuestRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const GUEST_COLUMNS: &str = "id, token, unique_url, nome, telefone, email, status, mesa, rsvp_deadline, created_at, updated_at";

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(&format!("SELECT {} FROM guests WHERE {} = $1", GUEST_COLUMNS, column))
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepo {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(&format!(
            "INSERT INTO guests ({0}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {0}",
            GUEST_COLUMNS
        ))
            .bind(&guest.id)
            .bind(&guest.token)
            .bind(&guest.unique_url)
            .bind(&guest.nome)
            .bind(&guest.telefone)
            .bind(&guest.email)
            .bind(&guest.status)
            .bind(&guest.mesa)
            .bind(guest.rsvp_deadline)
            .bind(guest.created_at)
            .bind(guest.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError> {
        self.find_one("id", id).await
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Guest>, AppError> {
        self.find_one("token", token).await
    }

    async fn find_by_unique_url(&self, unique_url: &str) -> Result<Option<Guest>, AppError> {
        self.find_one("unique_url", unique_url).await
    }

    async fn list(&self) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(&format!("SELECT {} FROM guests ORDER BY created_at DESC", GUEST_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(&format!(
            "UPDATE guests SET nome=$1, telefone=$2, email=$3, mesa=$4, unique_url=$5, rsvp_deadline=$6, updated_at=$7 WHERE id=$8 RETURNING {}",
            GUEST_COLUMNS
        ))
            .bind(&guest.nome)
            .bind(&guest.telefone)
            .bind(&guest.email)
            .bind(&guest.mesa)
            .bind(&guest.unique_url)
            .bind(guest.rsvp_deadline)
            .bind(guest.updated_at)
            .bind(&guest.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(AppError::guest_not_found)
    }

    async fn update_status(&self, token: &str, status: &str, updated_at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query("UPDATE guests SET status = $1, updated_at = $2 WHERE token = $3")
            .bind(status)
            .bind(updated_at)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::guest_not_found());
        }
        Ok(())
    }
}
