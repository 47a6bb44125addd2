use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::AppJson;
use crate::api::dtos::{requests::RsvpRequest, responses::RsvpResponse};
use crate::domain::models::guest::RsvpStatus;
use crate::error::AppError;
use std::sync::Arc;

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<RsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(token), Some(raw_status)) = (payload.token, payload.status) else {
        return Err(AppError::Validation("Token e status são obrigatórios".into()));
    };

    let status = RsvpStatus::parse_answer(raw_status.trim())
        .ok_or(AppError::Validation("Status inválido. Use 'confirmed' ou 'rejected'".into()))?;

    let recorded = state.invitation_service.record_rsvp(&token, status).await?;

    let message = match recorded {
        RsvpStatus::Confirmed => "Presença confirmada com sucesso!",
        _ => "Resposta registrada. Sentiremos sua falta!",
    };

    Ok(Json(RsvpResponse {
        message: message.to_string(),
        status: recorded.to_string(),
    }))
}
