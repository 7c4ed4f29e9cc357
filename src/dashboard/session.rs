//! Dashboard session, reducer and derive step

use serde::Serialize;
use std::sync::Arc;

use crate::charts::{build_bar_chart, build_radar_chart, ChartSpec};
use crate::ratings::RatingStore;
use crate::scoring::{compute_scores, ImportanceVector, ScoreEntry, ScoringResult};

/// A user interaction with the sliders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderEvent {
    /// One slider moved
    Set { task: usize, value: u8 },
    /// Every slider replaced at once
    SetAll(Vec<u8>),
    /// Back to the all-ones default
    Reset,
}

/// Everything the page displays for one importance vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Current slider values
    pub importance: ImportanceVector,
    /// Ranked scores, highest first
    pub scores: Vec<ScoreEntry>,
    pub bar: ChartSpec,
    pub radar: ChartSpec,
}

/// Apply one event to an importance vector
///
/// Invalid events leave the caller's vector as it was.
pub fn reduce(current: &ImportanceVector, event: &SliderEvent) -> ScoringResult<ImportanceVector> {
    match event {
        SliderEvent::Set { task, value } => current.with_level(*task, *value),
        SliderEvent::SetAll(values) => ImportanceVector::new(values.clone(), current.len()),
        SliderEvent::Reset => Ok(ImportanceVector::ones(current.len())),
    }
}

/// Recompute scores and both charts for an importance vector
pub fn derive(importance: &ImportanceVector, store: &RatingStore) -> DashboardView {
    let scores = compute_scores(importance, store);
    let bar = build_bar_chart(&scores, store);
    let radar = build_radar_chart(store);

    DashboardView {
        importance: importance.clone(),
        scores,
        bar,
        radar,
    }
}

/// Per-user dashboard state
pub struct DashboardSession {
    store: Arc<RatingStore>,
    importance: ImportanceVector,
    recomputes: u64,
}

impl DashboardSession {
    /// Start a session with every slider at 1
    pub fn new(store: Arc<RatingStore>) -> Self {
        let importance = ImportanceVector::ones(store.task_count());
        Self {
            store,
            importance,
            recomputes: 0,
        }
    }

    /// Current slider values
    pub fn importance(&self) -> &ImportanceVector {
        &self.importance
    }

    /// Number of events applied so far
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// View for the current state
    pub fn view(&self) -> DashboardView {
        derive(&self.importance, &self.store)
    }

    /// Apply an event and return the recomputed view
    pub fn apply(&mut self, event: &SliderEvent) -> ScoringResult<DashboardView> {
        let next = reduce(&self.importance, event)?;
        self.importance = next;
        self.recomputes += 1;

        tracing::debug!(
            event = ?event,
            importance = ?self.importance.levels(),
            recomputes = self.recomputes,
            "Dashboard recomputed"
        );

        Ok(self.view())
    }
}
