//! Rating Store
//!
//! Static, read-only table of tasks, platforms, per-platform ratings and
//! display colors. Built once at startup and shared behind an `Arc`.
//!
//! # Example
//!
//! ```rust
//! use weighmark::ratings::RatingStore;
//!
//! let store = RatingStore::fixture();
//! assert_eq!(store.task_count(), 10);
//! assert_eq!(store.color("Claude"), Some("#FFA500"));
//! ```

pub mod error;
pub mod types;

pub use error::{RatingError, RatingResult};
pub use types::{Platform, Task, Theme, MAX_LEVEL, MIN_LEVEL};

use serde::Serialize;
use std::collections::HashSet;

const FIXTURE_TASKS: [&str; 10] = [
    "Generating local data",
    "Writing funding proposals",
    "Analyzing economic data",
    "Creating data visualizations",
    "Writing reports",
    "Conducting action research",
    "Making presentations",
    "Summarizing technical reports",
    "Creating a PowerPoint from a report",
    "Creating a dashboard to track project progress",
];

const FIXTURE_PLATFORMS: [(&str, &str, [u8; 10]); 4] = [
    ("ChatGPT", "#FF6B6B", [4, 5, 3, 2, 5, 3, 4, 4, 3, 1]),
    ("Perplexity", "#4ECDC4", [5, 2, 5, 1, 3, 4, 2, 5, 1, 3]),
    ("Claude", "#FFA500", [3, 4, 4, 3, 4, 5, 3, 5, 4, 5]),
    ("Bard", "#9ACD32", [4, 3, 4, 2, 5, 3, 4, 4, 2, 4]),
];

/// Read-only table of tasks and platform ratings
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RatingStore {
    tasks: Vec<Task>,
    platforms: Vec<Platform>,
    theme: Theme,
}

impl RatingStore {
    /// Build a store from task names and platforms, checking every invariant
    pub fn new<S: Into<String>>(
        task_names: impl IntoIterator<Item = S>,
        platforms: Vec<Platform>,
    ) -> RatingResult<Self> {
        let tasks: Vec<Task> = task_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Task {
                index,
                name: name.into(),
            })
            .collect();

        if tasks.is_empty() {
            return Err(RatingError::NoTasks);
        }
        if platforms.is_empty() {
            return Err(RatingError::NoPlatforms);
        }

        let mut seen = HashSet::new();
        for platform in &platforms {
            if !seen.insert(platform.name.as_str()) {
                return Err(RatingError::DuplicatePlatform(platform.name.clone()));
            }
            if platform.ratings.len() != tasks.len() {
                return Err(RatingError::LengthMismatch {
                    platform: platform.name.clone(),
                    expected: tasks.len(),
                    actual: platform.ratings.len(),
                });
            }
            if let Some((task, &rating)) = platform
                .ratings
                .iter()
                .enumerate()
                .find(|(_, r)| **r > MAX_LEVEL)
            {
                return Err(RatingError::OutOfRange {
                    platform: platform.name.clone(),
                    task,
                    rating,
                });
            }
        }

        Ok(Self {
            tasks,
            platforms,
            theme: Theme::default(),
        })
    }

    /// The built-in table: four platforms rated on ten economic-development tasks
    pub fn fixture() -> Self {
        let tasks = FIXTURE_TASKS
            .iter()
            .enumerate()
            .map(|(index, name)| Task {
                index,
                name: (*name).to_string(),
            })
            .collect();

        let platforms = FIXTURE_PLATFORMS
            .iter()
            .map(|(name, color, ratings)| Platform::new(*name, *color, ratings.to_vec()))
            .collect();

        Self {
            tasks,
            platforms,
            theme: Theme::default(),
        }
    }

    /// Builder method: replace the page theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Tasks in index order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task names in index order
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of tasks (N)
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Platforms in declaration order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Look up a platform by name
    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// Ratings of a platform, in task order
    pub fn ratings(&self, platform: &str) -> Option<&[u8]> {
        self.platform(platform).map(|p| p.ratings.as_slice())
    }

    /// Display color of a platform
    pub fn color(&self, platform: &str) -> Option<&str> {
        self.platform(platform).map(|p| p.color.as_str())
    }

    /// Page theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for RatingStore {
    fn default() -> Self {
        Self::fixture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let store = RatingStore::fixture();
        assert_eq!(store.task_count(), 10);
        assert_eq!(store.platforms().len(), 4);
        for platform in store.platforms() {
            assert_eq!(platform.ratings.len(), store.task_count());
            assert!(platform.ratings.iter().all(|&r| (1..=5).contains(&r)));
        }
    }

    #[test]
    fn test_fixture_passes_validation() {
        let fixture = RatingStore::fixture();
        let rebuilt = RatingStore::new(
            fixture.task_names(),
            fixture.platforms().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, fixture);
    }

    #[test]
    fn test_fixture_lookups() {
        let store = RatingStore::fixture();
        let names: Vec<&str> = store.platforms().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ChatGPT", "Perplexity", "Claude", "Bard"]);
        assert_eq!(store.ratings("ChatGPT").unwrap()[0], 4);
        assert_eq!(store.color("Perplexity"), Some("#4ECDC4"));
        assert_eq!(store.color("Unknown"), None);
        assert_eq!(store.tasks()[9].name, "Creating a dashboard to track project progress");
        assert_eq!(store.theme().background, "#F0F8FF");
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = RatingStore::new(
            ["a", "b"],
            vec![Platform::new("X", "#000000", vec![1])],
        )
        .unwrap_err();
        assert!(matches!(err, RatingError::LengthMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = RatingStore::new(
            ["a", "b"],
            vec![Platform::new("X", "#000000", vec![1, 6])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RatingError::OutOfRange {
                platform: "X".to_string(),
                task: 1,
                rating: 6
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicates_and_empty() {
        let dup = RatingStore::new(
            ["a"],
            vec![
                Platform::new("X", "#000000", vec![1]),
                Platform::new("X", "#FFFFFF", vec![2]),
            ],
        );
        assert_eq!(dup.unwrap_err(), RatingError::DuplicatePlatform("X".to_string()));

        let no_tasks = RatingStore::new(Vec::<String>::new(), vec![]);
        assert_eq!(no_tasks.unwrap_err(), RatingError::NoTasks);

        let no_platforms = RatingStore::new(["a"], vec![]);
        assert_eq!(no_platforms.unwrap_err(), RatingError::NoPlatforms);
    }

    #[test]
    fn test_new_accepts_zero_rating() {
        let store = RatingStore::new(["a"], vec![Platform::new("X", "#000000", vec![0])]);
        assert!(store.is_ok());
    }
}
