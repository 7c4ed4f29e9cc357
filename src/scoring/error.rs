//! Scoring error types

use thiserror::Error;

/// Errors raised when an importance vector or slider event is invalid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Importance vector does not have one entry per task
    #[error("Expected {expected} importance values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Importance value outside the slider range
    #[error("Importance {value} for task {task} is outside 1..=5")]
    OutOfRange { task: usize, value: u8 },

    /// Slider event names a task that does not exist
    #[error("Unknown task index {task} (store has {task_count} tasks)")]
    UnknownTask { task: usize, task_count: usize },
}

/// Result type alias for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
