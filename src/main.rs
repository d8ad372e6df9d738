use std::sync::Arc;

use options_check_service::{
    application::services::IngestService, build_router, domain::config::service::ServiceConfig,
    services::UploadIngestor, AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env().expect("ERROR: Invalid service configuration");

    tracing::info!(
        "Starting options-check-service with SERVER_ID: {}",
        config.server_id
    );
    if config.service_secret.is_none() {
        tracing::warn!("SERVICE_SECRET not set, health endpoint is unguarded");
    }

    let port = config.port;
    let app_state = AppState {
        config: Arc::new(config),
        ingest_service: Arc::new(UploadIngestor::default()) as Arc<dyn IngestService>,
    };

    let router = build_router(app_state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
