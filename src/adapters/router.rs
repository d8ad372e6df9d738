use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::{info, warn};

use crate::adapters::{
    controllers::{check_controller::CheckController, health_controller::HealthController},
    middleware::validate_service_secret,
    state::AppState,
};

async fn index() -> &'static str {
    "Options check service is running"
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    }
}

pub fn build_router(app_state: AppState) -> Router {
    let max_upload_size = app_state.config.max_upload_size;
    let cors = cors_layer(app_state.config.cors_allowed_origins.as_deref());

    // Guarded by X-Service-Secret when one is configured
    let protected_routes = Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            validate_service_secret,
        ));

    let public_routes = Router::new()
        .route("/", get(index))
        .route("/api/v1/check", post(CheckController::check_uploads));

    info!("Upload body limit set to {} bytes", max_upload_size);

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(RequestBodyLimitLayer::new(max_upload_size))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(app_state)
}
