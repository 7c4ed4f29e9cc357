//! Importance vector
//!
//! One slider value per task, each in `1..=5`. The only mutable state in the
//! dashboard; sessions replace it wholesale through the reducer.

use serde::Serialize;

use super::error::{ScoringError, ScoringResult};
use crate::ratings::{MAX_LEVEL, MIN_LEVEL};

/// Validated per-task importance levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportanceVector(Vec<u8>);

impl ImportanceVector {
    /// Validate `values` against the expected task count
    pub fn new(values: Vec<u8>, task_count: usize) -> ScoringResult<Self> {
        if values.len() != task_count {
            return Err(ScoringError::LengthMismatch {
                expected: task_count,
                actual: values.len(),
            });
        }
        if let Some((task, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !is_valid_level(**v))
        {
            return Err(ScoringError::OutOfRange {
                task,
                value: *value,
            });
        }
        Ok(Self(values))
    }

    /// Every task at the same level (clamped into range)
    pub fn uniform(task_count: usize, level: u8) -> Self {
        Self(vec![level.clamp(MIN_LEVEL, MAX_LEVEL); task_count])
    }

    /// Slider defaults: every task at importance 1
    pub fn ones(task_count: usize) -> Self {
        Self::uniform(task_count, MIN_LEVEL)
    }

    /// Return a copy with one task changed
    pub fn with_level(&self, task: usize, value: u8) -> ScoringResult<Self> {
        if task >= self.0.len() {
            return Err(ScoringError::UnknownTask {
                task,
                task_count: self.0.len(),
            });
        }
        if !is_valid_level(value) {
            return Err(ScoringError::OutOfRange { task, value });
        }
        let mut values = self.0.clone();
        values[task] = value;
        Ok(Self(values))
    }

    /// Importance levels in task order
    pub fn levels(&self) -> &[u8] {
        &self.0
    }

    /// Number of tasks covered
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_valid_level(value: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&value)
}
