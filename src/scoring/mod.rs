//! Scoring Engine
//!
//! Pure mapping from an importance vector to a ranked list of
//! `(platform, normalized score)` pairs.
//!
//! - **importance**: validated slider vector
//! - **engine**: weights, contributions, totals and normalization
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use weighmark::ratings::RatingStore;
//! use weighmark::scoring::{compute_scores, ImportanceVector};
//!
//! let store = RatingStore::fixture();
//! let importance = ImportanceVector::ones(store.task_count());
//! let ranked = compute_scores(&importance, &store);
//!
//! assert_eq!(ranked[0].platform, "Claude");
//! assert_eq!(ranked[0].score, 100.0);
//! ```

pub mod engine;
pub mod error;
pub mod importance;

pub use engine::{
    compute_scores, contribution, normalize, platform_totals, weight, ScoreEntry, TIED_SCORE,
};
pub use error::{ScoringError, ScoringResult};
pub use importance::ImportanceVector;
