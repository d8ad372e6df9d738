//! Shared setup for the HTTP integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::Arc;

use axum_test::TestServer;
use options_check_service::{
    application::services::IngestService, build_router, domain::config::service::ServiceConfig,
    services::UploadIngestor, AppState,
};
use zip::write::{FileOptions, ZipWriter};

pub const PLAYER_YAML: &str = "name: Player1\ngame: A Link to the Past\n";

pub fn setup_test_app(config: ServiceConfig) -> TestServer {
    let app_state = AppState {
        config: Arc::new(config),
        ingest_service: Arc::new(UploadIngestor::default()) as Arc<dyn IngestService>,
    };
    TestServer::new(build_router(app_state)).expect("Failed to create test server")
}

pub fn default_app() -> TestServer {
    setup_test_app(ServiceConfig::default())
}

pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
        for (name, content) in entries {
            writer
                .start_file(*name, FileOptions::default())
                .expect("Failed to start zip entry");
            writer
                .write_all(content.as_bytes())
                .expect("Failed to write zip entry");
        }
        writer.finish().expect("Failed to finalize zip");
    }
    buffer
}
