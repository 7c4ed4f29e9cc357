//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// SCORING DTOs
// ============================================

/// Stateless recompute request
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// One importance level (1-5) per task, in task order
    pub importance: Vec<u8>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Platforms in the rating store
    pub platforms: usize,
    /// Tasks in the rating store
    pub tasks: usize,
    /// Live dashboard sessions
    pub active_sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
