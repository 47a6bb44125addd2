use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::error::AppError;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Gate for `/api/admin`. Requires `Authorization: Bearer <ADMIN_API_KEY>`
/// when a key is configured.
pub struct AdminAccess;

impl FromRequestParts<Arc<AppState>> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_api_key.as_deref() else {
            return Ok(AdminAccess);
        };

        let presented = parts.headers.get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        // Fixed-length comparison over digests.
        if Sha256::digest(presented.trim().as_bytes()) != Sha256::digest(expected.as_bytes()) {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminAccess)
    }
}
