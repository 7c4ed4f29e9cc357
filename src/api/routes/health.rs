//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the rating store can be scored.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if store_ready(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with store and session details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if store_ready(&state) {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        platforms: state.store.platforms().len(),
        tasks: state.store.task_count(),
        active_sessions: state.session_count().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn store_ready(state: &AppState) -> bool {
    state.store.task_count() > 0 && !state.store.platforms().is_empty()
}
