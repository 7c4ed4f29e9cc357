//! Weighted-sum scoring
//!
//! ```text
//! weight(i)          = importance(i) ^ 1.5
//! contribution(p, i) = weight(i) * (rating(p, i) + 0.1) * band(rating(p, i))
//! band(r)            = 1.1 if r > 3 else 0.9
//! total(p)           = sum_i contribution(p, i)
//! score(p)           = (total(p) - min) / (max - min) * 100
//! ```

use serde::Serialize;

use super::importance::ImportanceVector;
use crate::ratings::RatingStore;

/// Exponent applied to importance levels
pub const WEIGHT_EXPONENT: f64 = 1.5;

/// Offset keeping zero ratings from contributing nothing
pub const RATING_OFFSET: f64 = 0.1;

/// Ratings above this get the boost band, the rest the penalty band
pub const BAND_THRESHOLD: u8 = 3;

pub const BOOST: f64 = 1.1;
pub const PENALTY: f64 = 0.9;

/// Score given to every platform when all totals are equal
pub const TIED_SCORE: f64 = 100.0;

/// Upper end of the normalized scale
pub const SCALE_MAX: f64 = 100.0;

/// A platform's place in the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    /// Platform name
    pub platform: String,
    /// Normalized score in `0..=100`
    pub score: f64,
    /// Raw weighted total before normalization
    pub total: f64,
}

/// Weight for an importance level
pub fn weight(level: u8) -> f64 {
    f64::from(level).powf(WEIGHT_EXPONENT)
}

/// Contribution of one rating under a given task weight
pub fn contribution(weight: f64, rating: u8) -> f64 {
    let band = if rating > BAND_THRESHOLD { BOOST } else { PENALTY };
    weight * (f64::from(rating) + RATING_OFFSET) * band
}

/// Raw weighted totals, one per platform in declaration order
pub fn platform_totals(importance: &ImportanceVector, store: &RatingStore) -> Vec<f64> {
    debug_assert_eq!(importance.len(), store.task_count());

    let weights: Vec<f64> = importance.levels().iter().map(|&l| weight(l)).collect();

    store
        .platforms()
        .iter()
        .map(|platform| {
            weights
                .iter()
                .zip(&platform.ratings)
                .map(|(&w, &r)| contribution(w, r))
                .sum()
        })
        .collect()
}

/// Min-max rescale to `0..=100`
///
/// All-equal totals map to `TIED_SCORE`.
pub fn normalize(totals: &[f64]) -> Vec<f64> {
    let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.is_nan() || range <= 0.0 {
        return vec![TIED_SCORE; totals.len()];
    }

    totals
        .iter()
        .map(|t| (t - min) / range * SCALE_MAX)
        .collect()
}

/// Rank every platform in the store, highest score first
///
/// Equal scores keep platform declaration order.
pub fn compute_scores(importance: &ImportanceVector, store: &RatingStore) -> Vec<ScoreEntry> {
    let totals = platform_totals(importance, store);
    let scores = normalize(&totals);

    let mut entries: Vec<ScoreEntry> = store
        .platforms()
        .iter()
        .zip(totals.iter().zip(scores))
        .map(|(platform, (&total, score))| ScoreEntry {
            platform: platform.name.clone(),
            score,
            total,
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::trace!(
        importance = ?importance.levels(),
        leader = entries.first().map(|e| e.platform.as_str()).unwrap_or(""),
        "Computed scores"
    );

    entries
}
