//! Health endpoint integration tests.

mod helpers;

use axum::http::StatusCode;
use options_check_service::{
    adapters::middleware::SERVICE_SECRET_HEADER, domain::config::service::ServiceConfig,
};
use serde_json::Value;

use helpers::{default_app, setup_test_app};

fn guarded_app() -> axum_test::TestServer {
    setup_test_app(ServiceConfig {
        server_id: "webhost-test".to_string(),
        service_secret: Some("s3cret".to_string()),
        ..ServiceConfig::default()
    })
}

#[tokio::test]
async fn test_health_open_without_secret() {
    let server = default_app();
    let response = server.get("/api/v1/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["serverId"], "options-check");
    assert_eq!(body["config"]["maxUploadSize"], 10 * 1024 * 1024);
    assert_eq!(
        body["config"]["allowedExtensions"],
        serde_json::json!([".yaml", ".json", ".yml", ".txt", ".zip"])
    );
    assert!(body["config"]["bannedExtensions"]
        .as_array()
        .expect("Expected banned list")
        .iter()
        .any(|ext| ext == ".sfc"));
    assert!(body["metrics"].get("memoryTotalBytes").is_some());
}

#[tokio::test]
async fn test_health_requires_secret_when_configured() {
    let server = guarded_app();
    let response = server.get("/api/v1/health").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_rejects_wrong_secret() {
    let server = guarded_app();
    let response = server
        .get("/api/v1/health")
        .add_header(SERVICE_SECRET_HEADER, "nope")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_accepts_secret() {
    let server = guarded_app();
    let response = server
        .get("/api/v1/health")
        .add_header(SERVICE_SECRET_HEADER, "s3cret")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["serverId"], "webhost-test");
}

#[tokio::test]
async fn test_index_is_not_guarded() {
    let server = guarded_app();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
