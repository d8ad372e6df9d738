use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::info;

use crate::{adapters::state::AppState, domain::config::policy::ExtensionPolicy};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "serverId")]
    pub server_id: String,
    pub config: HealthConfigInfo,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

#[derive(Debug, Serialize)]
pub struct HealthConfigInfo {
    #[serde(rename = "maxUploadSize")]
    pub max_upload_size: usize,
    #[serde(flatten)]
    pub policy: ExtensionPolicy,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/v1/health
    pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
        info!("Health check requested");

        let config_info = HealthConfigInfo {
            max_upload_size: app_state.config.max_upload_size,
            policy: app_state.ingest_service.policy().clone(),
        };

        // Only refresh what's needed
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            server_id: app_state.config.server_id.clone(),
            config: config_info,
            metrics: SystemMetrics {
                cpu_usage_percent: sys.global_cpu_usage(),
                memory_used_bytes: memory_used,
                memory_total_bytes: memory_total,
                memory_usage_percent,
            },
        })
    }
}
