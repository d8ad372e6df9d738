use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message, markup) = match self {
            ApplicationError::Rejected(ref rejection) => {
                warn!("Upload rejected: {}", rejection);
                let message = rejection.message();
                (
                    StatusCode::BAD_REQUEST,
                    message.text().to_string(),
                    message.is_markup(),
                )
            }
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request".to_string(), false)
            }
            ApplicationError::PayloadTooLarge => {
                warn!("Upload too large");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Upload too large".to_string(),
                    false,
                )
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    false,
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "markup": markup,
        }));

        (status, body).into_response()
    }
}
