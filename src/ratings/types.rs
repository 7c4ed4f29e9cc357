//! Core data types for the rating table
//!
//! - `Task`: something a platform can be asked to do
//! - `Platform`: a rated platform with its display color
//! - `Theme`: page-level colors shared by both charts

use serde::{Deserialize, Serialize};

/// Highest rating (and importance) on the 1-5 scale
pub const MAX_LEVEL: u8 = 5;

/// Lowest importance a slider can express
pub const MIN_LEVEL: u8 = 1;

/// A task the platforms are rated on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Stable position in the task list (0..N)
    pub index: usize,
    /// Human-readable task name, also used as the radar axis label
    pub name: String,
}

/// A rated platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    /// Platform name, unique within a store
    pub name: String,
    /// Display color (hex code)
    pub color: String,
    /// One rating per task, in task order
    pub ratings: Vec<u8>,
}

impl Platform {
    /// Create a new platform
    pub fn new(name: impl Into<String>, color: impl Into<String>, ratings: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ratings,
        }
    }

    /// Rating for a task index, if it exists
    pub fn rating(&self, task: usize) -> Option<u8> {
        self.ratings.get(task).copied()
    }
}

/// Page colors applied to every chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    /// Plot and paper background
    pub background: String,
    /// Font color
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#F0F8FF".to_string(),
            text: "#1E3D59".to_string(),
        }
    }
}
