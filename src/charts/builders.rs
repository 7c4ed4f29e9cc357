//! Chart builders
//!
//! Pure functions from scores / ratings to `ChartSpec`s.

use super::types::{Axis, ChartKind, ChartSpec, Series};
use crate::ratings::{RatingStore, MAX_LEVEL};
use crate::scoring::ScoreEntry;

pub const BAR_TITLE: &str = "AI Platform Ranking Based on Task Importance";
pub const RADAR_TITLE: &str = "Platform Comparison Across Tasks";
pub const BAR_X_TITLE: &str = "Platforms";
pub const BAR_Y_TITLE: &str = "Overall Score";

/// Used when a score names a platform the store does not know
const FALLBACK_COLOR: &str = "#808080";

/// One bar per ranked platform, in the given order
pub fn build_bar_chart(scores: &[ScoreEntry], store: &RatingStore) -> ChartSpec {
    let labels = scores.iter().map(|e| e.platform.clone()).collect();
    let values = scores.iter().map(|e| e.score).collect();
    let colors = scores
        .iter()
        .map(|e| store.color(&e.platform).unwrap_or(FALLBACK_COLOR).to_string())
        .collect();
    let text = scores.iter().map(|e| format!("{:.1}", e.score)).collect();

    ChartSpec {
        kind: ChartKind::Bar,
        title: BAR_TITLE.to_string(),
        series: vec![Series {
            name: None,
            labels,
            values,
            colors,
            text,
            filled: true,
            closed: false,
        }],
        x_axis: Axis::titled(BAR_X_TITLE),
        y_axis: Axis::titled(BAR_Y_TITLE),
        show_legend: false,
        theme: store.theme().clone(),
    }
}

/// One filled polygon per platform over raw ratings
///
/// Does not depend on importance.
pub fn build_radar_chart(store: &RatingStore) -> ChartSpec {
    let axes: Vec<String> = store.task_names().into_iter().map(String::from).collect();

    let series = store
        .platforms()
        .iter()
        .map(|platform| Series {
            name: Some(platform.name.clone()),
            labels: axes.clone(),
            values: platform.ratings.iter().map(|&r| f64::from(r)).collect(),
            colors: vec![platform.color.clone()],
            text: Vec::new(),
            filled: true,
            closed: true,
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Radar,
        title: RADAR_TITLE.to_string(),
        series,
        x_axis: Axis::default(),
        y_axis: Axis::ranged(0.0, f64::from(MAX_LEVEL)),
        show_legend: true,
        theme: store.theme().clone(),
    }
}
