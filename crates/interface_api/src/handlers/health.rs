//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub adapters: Vec<HealthCheckResult>,
}

/// Health check endpoint
///
/// Reports every store behind the engine; any unhealthy adapter turns the
/// response into a 503.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let mut adapters = state.engine.health_checks();
    adapters.push(state.outbox.health_check());

    let healthy = adapters
        .iter()
        .all(|a| a.status != AdapterHealth::Unhealthy);
    let (code, status) = if healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            adapters,
        }),
    )
}
