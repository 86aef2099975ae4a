//! Health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::Disease;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Status of a single model artifact
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns 200 while the process is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Reports which model artifacts are loaded or present on disk
///
/// Missing models degrade the service without failing readiness: the pages
/// still render and report the error inline.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let registry = state.prediction_service.registry();
    let mut checks = Vec::with_capacity(Disease::ALL.len());

    for disease in Disease::ALL {
        let model_id = disease.model_id();
        let check = if registry.is_loaded(model_id).await {
            HealthCheck {
                name: model_id.to_string(),
                status: HealthStatus::Healthy,
                message: Some("loaded".to_string()),
            }
        } else if registry.is_available(model_id).await {
            HealthCheck {
                name: model_id.to_string(),
                status: HealthStatus::Healthy,
                message: None,
            }
        } else {
            HealthCheck {
                name: model_id.to_string(),
                status: HealthStatus::Degraded,
                message: Some("model artifact not found".to_string()),
            }
        };
        checks.push(check);
    }

    let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    (StatusCode::OK, Json(response))
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
