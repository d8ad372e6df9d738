use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::domain::config::service::ServiceConfig;

pub const SERVICE_SECRET_HEADER: &str = "X-Service-Secret";

/// Middleware to validate the X-Service-Secret header. Routes stay open
/// when no secret is configured.
pub async fn validate_service_secret(
    State(config): State<Arc<ServiceConfig>>,
    headers: HeaderMap,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected_secret) = config.service_secret.as_deref() else {
        return next.run(request).await;
    };

    match headers.get(SERVICE_SECRET_HEADER) {
        Some(header_value) => match header_value.to_str() {
            Ok(provided_secret) if provided_secret == expected_secret => next.run(request).await,
            Ok(_) => {
                // Log details but return generic error
                warn!("Invalid secret provided in {} header", SERVICE_SECRET_HEADER);
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            Err(_) => {
                warn!("{} header contains invalid UTF-8", SERVICE_SECRET_HEADER);
                (StatusCode::BAD_REQUEST, "Bad request").into_response()
            }
        },
        None => {
            warn!("{} header is missing", SERVICE_SECRET_HEADER);
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}
