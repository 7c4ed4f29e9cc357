//! Rating Routes
//!
//! - GET /api/v1/ratings - The rating table (tasks, platforms, theme)

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::ratings::RatingStore;

/// GET /api/v1/ratings
pub async fn list_ratings(State(state): State<Arc<AppState>>) -> Json<RatingStore> {
    Json(RatingStore::clone(&state.store))
}
