use wedding_invite_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_guest_repo::SqliteGuestRepo,
        sqlite_felicitation_repo::SqliteFelicitationRepo,
        sqlite_wedding_repo::SqliteWeddingRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::build(None).await
    }

    pub async fn with_admin_key(key: &str) -> Self {
        Self::build(Some(key.to_string())).await
    }

    async fn build(admin_api_key: Option<String>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_api_key,
            log_dir: "./logs".to_string(),
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteGuestRepo::new(pool.clone())),
            Arc::new(SqliteFelicitationRepo::new(pool.clone())),
            Arc::new(SqliteWeddingRepo::new(pool.clone())),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn send_json(&self, method: &str, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder().method(method).uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap()
    }

    pub async fn send_raw(&self, method: &str, uri: &str, content_type: Option<&str>, body: &str) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        self.router.clone().oneshot(
            request.body(Body::from(body.to_string())).unwrap()
        ).await.unwrap()
    }

    /// Creates a guest through the admin API and returns the stored row.
    pub async fn create_guest(&self, payload: Value) -> Value {
        let response = self.send_json("POST", "/api/admin/guests", payload).await;
        let status = response.status();
        let body = parse_body(response).await;
        if !status.is_success() {
            panic!("Guest creation failed in test helper: status {}, body {:?}", status, body);
        }
        body["guest"].clone()
    }

    pub async fn insert_wedding(&self, slug: &str, bride: &str, groom: &str, created_at: DateTime<Utc>) -> String {
        let wedding_id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO weddings (id, slug, created_at) VALUES (?, ?, ?)")
            .bind(&wedding_id)
            .bind(slug)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .unwrap();

        sqlx::query(
            "INSERT INTO wedding_data (id, wedding_id, bride, groom, date, day_of_week, time, venue, invitation_text, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
            .bind(Uuid::new_v4().to_string())
            .bind(&wedding_id)
            .bind(bride)
            .bind(groom)
            .bind("2025-11-22")
            .bind("Sábado")
            .bind("16:00")
            .bind("Quinta das Flores")
            .bind("Temos a honra de convidar")
            .bind(created_at)
            .execute(&self.pool)
            .await
            .unwrap();

        wedding_id
    }

    pub async fn count_felicitations(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM felicitations")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
