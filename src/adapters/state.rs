use axum::extract::FromRef;
use std::sync::Arc;

use crate::{application::services::IngestService, domain::config::service::ServiceConfig};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub ingest_service: Arc<dyn IngestService>,
}
