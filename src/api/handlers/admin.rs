use axum::{extract::{State, Path}, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use crate::state::AppState;
use crate::api::extractors::json::AppJson;
use crate::api::extractors::admin::AdminAccess;
use crate::api::dtos::{
    requests::{CreateGuestRequest, UpdateGuestRequest},
    responses::{GuestListResponse, GuestSavedResponse, GuestSummaryResponse, MessageResponse},
};
use crate::domain::models::guest::{parse_deadline, Guest, RsvpStatus};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
) -> Result<impl IntoResponse, AppError> {
    let guests = state.guest_repo.list().await?;
    Ok(Json(GuestListResponse { guests }))
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
    AppJson(payload): AppJson<CreateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(nome), Some(telefone)) = (non_blank(payload.nome), non_blank(payload.telefone)) else {
        return Err(AppError::Validation("Nome e telefone são obrigatórios".into()));
    };

    let rsvp_deadline = match non_blank(payload.rsvp_deadline) {
        Some(raw) => Some(deadline_from(&raw)?),
        None => None,
    };

    let guest = Guest::new(
        nome,
        telefone,
        non_blank(payload.email),
        non_blank(payload.token),
        non_blank(payload.unique_url),
        rsvp_deadline,
    );

    if state.guest_repo.find_by_token(&guest.token).await?.is_some() {
        return Err(AppError::Validation("Este token já está em uso".into()));
    }
    ensure_unique_url_free(&state, &guest.unique_url, None).await?;

    let created = state.guest_repo.create(&guest).await?;
    info!(guest_id = %created.id, "Guest created");

    Ok(Json(GuestSavedResponse {
        message: "Convidado criado com sucesso!".to_string(),
        guest: created,
    }))
}

pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
    Path(guest_id): Path<String>,
    AppJson(payload): AppJson<UpdateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guest = state.guest_repo.find_by_id(&guest_id).await?
        .ok_or_else(AppError::guest_not_found)?;

    if let Some(nome) = payload.nome {
        guest.nome = non_blank(Some(nome))
            .ok_or(AppError::Validation("Nome não pode ficar vazio".into()))?;
    }
    if let Some(telefone) = payload.telefone {
        guest.telefone = non_blank(Some(telefone))
            .ok_or(AppError::Validation("Telefone não pode ficar vazio".into()))?;
    }
    if let Some(email) = payload.email {
        guest.email = non_blank(Some(email));
    }
    if let Some(mesa) = payload.mesa {
        guest.mesa = non_blank(Some(mesa));
    }
    if let Some(unique_url) = payload.unique_url {
        let unique_url = non_blank(Some(unique_url))
            .ok_or(AppError::Validation("Link do convidado não pode ficar vazio".into()))?;
        if unique_url != guest.unique_url {
            ensure_unique_url_free(&state, &unique_url, Some(&guest.id)).await?;
            guest.unique_url = unique_url;
        }
    }
    if let Some(raw) = payload.rsvp_deadline {
        guest.rsvp_deadline = match non_blank(Some(raw)) {
            Some(raw) => Some(deadline_from(&raw)?),
            None => None,
        };
    }
    guest.updated_at = Utc::now();

    let updated = state.guest_repo.update(&guest).await?;
    info!(guest_id = %updated.id, mesa = ?updated.mesa, "Guest updated");

    Ok(Json(GuestSavedResponse {
        message: "Convidado atualizado com sucesso!".to_string(),
        guest: updated,
    }))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.guest_repo.delete(&guest_id).await?;
    info!(guest_id = %guest_id, "Guest deleted");
    Ok(Json(MessageResponse {
        message: "Convidado removido com sucesso!".to_string(),
    }))
}

pub async fn guest_summary(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
) -> Result<impl IntoResponse, AppError> {
    let guests = state.guest_repo.list().await?;

    let mut summary = GuestSummaryResponse { total: guests.len(), ..Default::default() };
    for guest in &guests {
        match guest.status.parse::<RsvpStatus>() {
            Ok(RsvpStatus::Pending) => summary.pending += 1,
            Ok(RsvpStatus::Confirmed) => summary.confirmed += 1,
            Ok(RsvpStatus::Rejected) => summary.rejected += 1,
            Err(()) => {}
        }
        if guest.mesa.is_some() {
            summary.seated += 1;
        }
    }

    Ok(Json(summary))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn deadline_from(raw: &str) -> Result<DateTime<Utc>, AppError> {
    parse_deadline(raw)
        .ok_or(AppError::Validation("Prazo de confirmação inválido".into()))
}

async fn ensure_unique_url_free(state: &AppState, unique_url: &str, owner_id: Option<&str>) -> Result<(), AppError> {
    match state.guest_repo.find_by_unique_url(unique_url).await? {
        Some(existing) if Some(existing.id.as_str()) != owner_id => {
            Err(AppError::Validation("Este link já está em uso por outro convidado".into()))
        }
        _ => Ok(()),
    }
}
