//! Score Routes
//!
//! Stateless recompute for callers that hold their own slider state.
//!
//! - POST /api/v1/scores - Scores plus bar and radar chart specs

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ScoreRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{derive, DashboardView};
use crate::scoring::ImportanceVector;

/// POST /api/v1/scores
///
/// Derive the full dashboard view for an importance vector.
/// Malformed bodies come back as `VALIDATION_ERROR` like any other bad input.
pub async fn compute(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<DashboardView>> {
    let Json(req) = payload?;
    let importance = ImportanceVector::new(req.importance, state.store.task_count())?;
    Ok(Json(derive(&importance, &state.store)))
}
