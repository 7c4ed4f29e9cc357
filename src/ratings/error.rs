//! Rating store error types
//!
//! Raised only by the validating constructor; the built-in fixture never fails.

use thiserror::Error;

/// Errors that can occur while building a rating store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The store must list at least one task
    #[error("Rating store has no tasks")]
    NoTasks,

    /// The store must list at least one platform
    #[error("Rating store has no platforms")]
    NoPlatforms,

    /// Two platforms share a name
    #[error("Duplicate platform: {0}")]
    DuplicatePlatform(String),

    /// A platform's rating vector does not cover every task
    #[error("Platform {platform} has {actual} ratings, expected {expected}")]
    LengthMismatch {
        platform: String,
        expected: usize,
        actual: usize,
    },

    /// A rating lies outside the accepted scale
    #[error("Platform {platform} rates task {task} as {rating}, expected 0..=5")]
    OutOfRange {
        platform: String,
        task: usize,
        rating: u8,
    },
}

/// Result type alias for rating store operations
pub type RatingResult<T> = Result<T, RatingError>;
