//! Health check handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub assistant: ServiceStatus,
}

/// Status of a dependent service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Readiness check
///
/// The route pipeline needs no warm-up, so the server is ready as soon as
/// it binds; the assistant status is reported per component.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let assistant_healthy = state.chat_service.is_healthy().await;
    let model = if assistant_healthy {
        Some(state.chat_service.current_model())
    } else {
        None
    };

    Json(ReadinessResponse {
        ready: true,
        assistant: ServiceStatus {
            healthy: assistant_healthy,
            model,
        },
    })
}
