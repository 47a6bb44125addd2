use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, felicitation, guest, health, rsvp, wedding};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Guest invitation
        .route("/api/convidados/{token}", get(guest::get_guest_by_token))
        .route("/api/guests/{guest_id}", get(guest::get_guest_by_unique_url))
        .route("/api/rsvp", post(rsvp::submit_rsvp))

        // Felicitations
        .route("/api/felicitations", get(felicitation::list_felicitations).post(felicitation::create_felicitation))

        // Wedding page data
        .route("/api/wedding", get(wedding::get_wedding))

        // Admin
        .route("/api/admin/guests", get(admin::list_guests).post(admin::create_guest))
        .route("/api/admin/guests/summary", get(admin::guest_summary))
        .route("/api/admin/guests/{guest_id}", put(admin::update_guest).delete(admin::delete_guest))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
