use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::WeddingQuery;
use crate::domain::services::wedding_presenter;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_wedding(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeddingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let presentation = wedding_presenter::resolve(state.wedding_repo.as_ref(), query.slug.as_deref()).await?;
    Ok(Json(presentation))
}
