use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::AppJson;
use crate::api::dtos::{
    requests::{CreateFelicitationRequest, FelicitationQuery},
    responses::{FelicitationCreatedResponse, FelicitationEntry},
};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_felicitations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FelicitationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let token = query.token.unwrap_or_default();
    let felicitations = state.invitation_service.list_felicitations(&token).await?;

    let entries: Vec<FelicitationEntry> = felicitations.into_iter().map(FelicitationEntry::from).collect();
    Ok(Json(entries))
}

pub async fn create_felicitation(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateFelicitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.invitation_service.append_felicitation(
        payload.token.as_deref().unwrap_or_default(),
        payload.name.as_deref().unwrap_or_default(),
        payload.message.as_deref().unwrap_or_default(),
    ).await?;

    Ok(Json(FelicitationCreatedResponse {
        message: "Felicitação enviada com sucesso!".to_string(),
        id: created.id,
    }))
}
