use axum::{extract::{State, Path}, http::StatusCode, response::{IntoResponse, Response}, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{ExpiredInvitationResponse, GuestByTokenResponse, GuestByUrlResponse, GuestView};
use crate::domain::services::invitation_service::Resolution;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub const MSG_INVITATION_EXPIRED: &str = "Convite expirado";
pub const MSG_EXPIRED_WARNING: &str = "Este convite expirou. O prazo para confirmação de presença já passou.";

/// Token lookup. An expired invitation answers 410 but still carries the
/// guest so the page can render its expired state.
pub async fn get_guest_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Response, AppError> {
    let resolution = state.invitation_service.resolve_by_token(&token).await?;

    let response = match resolution {
        Resolution::Active(guest) => {
            Json(GuestByTokenResponse { convidado: GuestView::from(guest) }).into_response()
        }
        Resolution::Expired(guest) => {
            info!(guest_id = %guest.id, "Expired invitation opened by token");
            (
                StatusCode::GONE,
                Json(ExpiredInvitationResponse {
                    error: MSG_INVITATION_EXPIRED.to_string(),
                    convidado: GuestView::from(guest),
                }),
            ).into_response()
        }
    };

    Ok(response)
}

/// Link lookup. Unlike the token path, expiry is only a warning here.
pub async fn get_guest_by_unique_url(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resolution = state.invitation_service.resolve_by_unique_url(&guest_id).await?;

    let warning = resolution.is_expired().then(|| MSG_EXPIRED_WARNING.to_string());
    let guest = match resolution {
        Resolution::Active(guest) | Resolution::Expired(guest) => guest,
    };

    Ok(Json(GuestByUrlResponse {
        guest: GuestView::from(guest),
        warning,
    }))
}
