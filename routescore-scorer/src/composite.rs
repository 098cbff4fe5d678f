//! The composite 0-100 optimization score.
//!
//! A linear combination of capped penalties and bonuses:
//!
//! ```text
//! score = base
//!       - min(max_distance_penalty, km / km_per_distance_point)
//!       - min(max_time_penalty, minutes / minutes_per_time_point)
//!       + min(max_gap_filling_bonus, gap_filling * gap_filling_weight)
//!       + min(max_clustering_bonus, clustering * clustering_weight)
//!       + min(max_schedule_bonus, schedule * schedule_weight)
//!       + min(max_date_coverage_bonus, coverage * date_coverage_weight)
//! ```
//!
//! Each term is capped before combination, then the sum is clamped to
//! `0..=100` and rounded.

use log::debug;

use crate::{OptimizationScoreInput, ScoreWeights};

/// Every term of a composite score, for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreBreakdown {
    /// Starting score.
    pub base: f64,
    /// Capped distance penalty.
    pub distance_penalty: f64,
    /// Capped travel-time penalty.
    pub time_penalty: f64,
    /// Capped gap-filling bonus.
    pub gap_filling_bonus: f64,
    /// Capped clustering bonus.
    pub clustering_bonus: f64,
    /// Capped schedule efficiency bonus.
    pub schedule_bonus: f64,
    /// Capped date coverage bonus.
    pub date_coverage_bonus: f64,
    /// Unclamped, unrounded sum of the terms.
    pub raw: f64,
    /// Final score in `0..=100`.
    pub score: u8,
}

#[expect(
    clippy::float_arithmetic,
    reason = "penalty is a ratio of a measured quantity"
)]
fn capped_ratio(value: f64, per_point: f64, cap: f64) -> f64 {
    (value / per_point).min(cap)
}

#[expect(clippy::float_arithmetic, reason = "bonus is a weighted sub-score")]
fn capped_bonus(sub_score: u8, weight: f64, cap: f64) -> f64 {
    (f64::from(sub_score) * weight).min(cap)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped into 0..=100 before the cast"
)]
fn clamp_to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

/// Compute every term of the composite score.
///
/// # Examples
/// ```
/// use routescore_scorer::{OptimizationScoreInput, ScoreWeights, score_breakdown};
///
/// let input = OptimizationScoreInput::new(5000.0, 0, 0, 0, 0)?;
/// let breakdown = score_breakdown(&input, &ScoreWeights::default());
/// assert_eq!(breakdown.distance_penalty, 20.0);
/// assert_eq!(breakdown.score, 80);
/// # Ok::<(), routescore_scorer::ScoreInputError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the composite score is a weighted sum of float terms"
)]
#[must_use]
pub fn score_breakdown(input: &OptimizationScoreInput, weights: &ScoreWeights) -> ScoreBreakdown {
    let distance_penalty = capped_ratio(
        input.total_distance_km(),
        weights.km_per_distance_point,
        weights.max_distance_penalty,
    );
    let time_penalty = capped_ratio(
        f64::from(input.total_travel_time_minutes()),
        weights.minutes_per_time_point,
        weights.max_time_penalty,
    );
    let gap_filling_bonus = capped_bonus(
        input.gap_filling_quality(),
        weights.gap_filling_weight,
        weights.max_gap_filling_bonus,
    );
    let clustering_bonus = capped_bonus(
        input.clustering_score(),
        weights.clustering_weight,
        weights.max_clustering_bonus,
    );
    let schedule_bonus = capped_bonus(
        input.schedule_efficiency_score(),
        weights.schedule_weight,
        weights.max_schedule_bonus,
    );
    let date_coverage_bonus = capped_bonus(
        input.date_coverage_score(),
        weights.date_coverage_weight,
        weights.max_date_coverage_bonus,
    );

    let raw = weights.base - distance_penalty - time_penalty
        + gap_filling_bonus
        + clustering_bonus
        + schedule_bonus
        + date_coverage_bonus;
    let score = clamp_to_score(raw);

    debug!(
        "optimization score {score} (raw {raw:.2}): -{distance_penalty:.2} distance, \
         -{time_penalty:.2} time, +{gap_filling_bonus:.2} gap filling, \
         +{clustering_bonus:.2} clustering, +{schedule_bonus:.2} schedule, \
         +{date_coverage_bonus:.2} coverage"
    );

    ScoreBreakdown {
        base: weights.base,
        distance_penalty,
        time_penalty,
        gap_filling_bonus,
        clustering_bonus,
        schedule_bonus,
        date_coverage_bonus,
        raw,
        score,
    }
}

/// Composite optimization score in `0..=100`; higher is better.
///
/// Only compare scores of routes that visit the same stops: nothing is
/// normalised by route length.
///
/// # Examples
/// ```
/// use routescore_scorer::{OptimizationScoreInput, ScoreWeights, optimization_score};
///
/// let perfect = OptimizationScoreInput::new(0.0, 0, 100, 100, 100)?;
/// assert_eq!(optimization_score(&perfect, &ScoreWeights::default()), 100);
/// # Ok::<(), routescore_scorer::ScoreInputError>(())
/// ```
#[must_use]
pub fn optimization_score(input: &OptimizationScoreInput, weights: &ScoreWeights) -> u8 {
    score_breakdown(input, weights).score
}
