mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_wedding_by_slug_is_reshaped() {
    let app = TestApp::new().await;
    let wedding_id = app.insert_wedding("joana-e-pedro", "Joana", "Pedro", Utc::now() - Duration::days(2)).await;
    app.insert_wedding("rita-e-joao", "Rita", "João", Utc::now()).await;

    sqlx::query("UPDATE wedding_data SET rsvp_numbers_json = ?, ceremony_types_json = ?, design_elements_json = ? WHERE wedding_id = ?")
        .bind(r#"["+258 84 000 0001", "+258 82 000 0002"]"#)
        .bind(r#"[{"name": "Cerimónia civil", "time": "14:00"}]"#)
        .bind(r##"{"primary_color": "#b08d57", "font": "Great Vibes"}"##)
        .bind(&wedding_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app.get("/api/wedding?slug=joana-e-pedro").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    let details = &body["wedding_details"];
    assert_eq!(details["bride"], "Joana");
    assert_eq!(details["groom"], "Pedro");
    assert_eq!(details["date"], "2025-11-22");
    assert_eq!(details["day_of_week"], "Sábado");
    assert_eq!(details["time"], "16:00");
    assert_eq!(details["venue"], "Quinta das Flores");
    assert_eq!(details["rsvp_numbers"].as_array().unwrap().len(), 2);

    assert_eq!(body["invitation_text"], "Temos a honra de convidar");
    assert_eq!(body["ceremony_types"][0]["name"], "Cerimónia civil");
    assert_eq!(body["wedding_program"], json!([]));
    assert_eq!(body["design_elements"]["font"], "Great Vibes");
}

#[tokio::test]
async fn test_missing_collections_default_to_empty() {
    let app = TestApp::new().await;
    app.insert_wedding("simples", "Eva", "Adão", Utc::now()).await;

    let body = parse_body(app.get("/api/wedding?slug=simples").await).await;
    assert_eq!(body["wedding_details"]["rsvp_numbers"], json!([]));
    assert_eq!(body["ceremony_types"], json!([]));
    assert_eq!(body["wedding_program"], json!([]));
    assert_eq!(body["design_elements"], json!({}));
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let app = TestApp::new().await;
    app.insert_wedding("existe", "A", "B", Utc::now()).await;

    let res = app.get("/api/wedding?slug=nao-existe").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await, json!({"error": "Casamento não encontrado"}));
}

#[tokio::test]
async fn test_no_slug_returns_most_recent_configuration() {
    let app = TestApp::new().await;
    app.insert_wedding("antigo", "Clara", "Duarte", Utc::now() - Duration::days(30)).await;
    app.insert_wedding("recente", "Sofia", "Tomás", Utc::now() - Duration::hours(1)).await;

    let res = app.get("/api/wedding").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["wedding_details"]["bride"], "Sofia");

    // A blank slug behaves like no slug
    let res = app.get("/api/wedding?slug=").await;
    assert_eq!(parse_body(res).await["wedding_details"]["bride"], "Sofia");
}

#[tokio::test]
async fn test_empty_store_is_not_found() {
    let app = TestApp::new().await;

    let res = app.get("/api/wedding").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_corrupt_configuration_is_a_server_error() {
    let app = TestApp::new().await;
    app.insert_wedding("quebrado", "X", "Y", Utc::now()).await;
    sqlx::query("UPDATE wedding_data SET wedding_program_json = '[{oops'")
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app.get("/api/wedding?slug=quebrado").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse_body(res).await["error"], "Erro interno do servidor");
}
