use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::dto::check_dto::CheckResponse,
    application::{error::ApplicationError, services::IngestService},
    domain::models::file::UploadedFile,
};

/// Form field browsers use for the options file picker.
const FILE_FIELD: &str = "file";

fn multipart_error(e: MultipartError) -> ApplicationError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::PayloadTooLarge
    } else {
        warn!("Invalid multipart data: {}", e);
        ApplicationError::BadRequest("Invalid request format".to_string())
    }
}

pub struct CheckController;

impl CheckController {
    /// Validates a batch of player options files
    /// POST /api/v1/check
    /// Body: multipart/form-data, one part per file (flat or .zip)
    pub async fn check_uploads(
        State(ingest_service): State<Arc<dyn IngestService>>,
        mut multipart: Multipart,
    ) -> Result<Json<CheckResponse>, ApplicationError> {
        let mut files = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let filename = match field.file_name() {
                Some(name) => name.to_string(),
                // A picker submitted without a selection
                None if field.name() == Some(FILE_FIELD) => String::new(),
                None => continue,
            };

            let content = field.bytes().await.map_err(multipart_error)?;
            files.push(UploadedFile::new(filename, content.to_vec()));
        }

        info!("Checking {} uploaded files", files.len());

        let options = tokio::task::spawn_blocking(move || ingest_service.ingest(files))
            .await
            .map_err(|e| {
                ApplicationError::InternalError(format!("Ingestion task failed: {}", e))
            })??;

        Ok(Json(CheckResponse::from(options)))
    }
}
