//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub keys: KeyUsage,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Current key store occupancy
#[derive(Serialize)]
pub struct KeyUsage {
    pub count: usize,
    pub capacity: usize,
}

/// Returns 200 with key store occupancy while the store is reachable
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let capacity = state.api_key_service.capacity();

    let (status, code, count) = match state.api_key_service.count().await {
        Ok(count) => (HealthStatus::Healthy, StatusCode::OK, count),
        Err(e) => {
            tracing::warn!("Key store health check failed: {}", e);
            (HealthStatus::Unhealthy, StatusCode::SERVICE_UNAVAILABLE, 0)
        }
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        keys: KeyUsage { count, capacity },
    };

    (code, Json(response))
}
