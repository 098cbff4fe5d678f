//! Tunable constants of the composite optimization score.
#![forbid(unsafe_code)]

use crate::ScoreWeightsError;

/// Weights and caps applied by [`optimization_score`](crate::optimization_score).
///
/// The default reproduces the reference tuning: a base of 100, one penalty
/// point per 100 km and per 500 minutes (each capped at 20), and bonuses of
/// 0.15 per gap-filling, schedule or coverage point (capped at 15) and 0.10
/// per clustering point (capped at 10).
///
/// # Examples
/// ```
/// use routescore_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.base, 100.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScoreWeights")
)]
pub struct ScoreWeights {
    /// Starting score before penalties and bonuses.
    pub base: f64,
    /// Kilometres of driving per distance penalty point.
    pub km_per_distance_point: f64,
    /// Upper bound on the distance penalty.
    pub max_distance_penalty: f64,
    /// Minutes of driving per time penalty point.
    pub minutes_per_time_point: f64,
    /// Upper bound on the travel-time penalty.
    pub max_time_penalty: f64,
    /// Bonus points per gap-filling quality point.
    pub gap_filling_weight: f64,
    /// Upper bound on the gap-filling bonus.
    pub max_gap_filling_bonus: f64,
    /// Bonus points per clustering score point.
    pub clustering_weight: f64,
    /// Upper bound on the clustering bonus.
    pub max_clustering_bonus: f64,
    /// Bonus points per schedule efficiency score point.
    pub schedule_weight: f64,
    /// Upper bound on the schedule efficiency bonus.
    pub max_schedule_bonus: f64,
    /// Bonus points per date coverage score point.
    pub date_coverage_weight: f64,
    /// Upper bound on the date coverage bonus.
    pub max_date_coverage_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 100.0,
            km_per_distance_point: 100.0,
            max_distance_penalty: 20.0,
            minutes_per_time_point: 500.0,
            max_time_penalty: 20.0,
            gap_filling_weight: 0.15,
            max_gap_filling_bonus: 15.0,
            clustering_weight: 0.10,
            max_clustering_bonus: 10.0,
            schedule_weight: 0.15,
            max_schedule_bonus: 15.0,
            date_coverage_weight: 0.15,
            max_date_coverage_bonus: 15.0,
        }
    }
}

impl ScoreWeights {
    /// Check that every field is finite and non-negative and that divisors
    /// are non-zero.
    ///
    /// # Errors
    /// Returns the first offending field as a [`ScoreWeightsError`].
    pub fn validate(&self) -> Result<(), ScoreWeightsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreWeightsError::Invalid { field, value });
            }
        }
        for (field, value) in [
            ("km_per_distance_point", self.km_per_distance_point),
            ("minutes_per_time_point", self.minutes_per_time_point),
        ] {
            if value == 0.0 {
                return Err(ScoreWeightsError::ZeroDivisor { field });
            }
        }
        Ok(())
    }

    const fn fields(&self) -> [(&'static str, f64); 13] {
        [
            ("base", self.base),
            ("km_per_distance_point", self.km_per_distance_point),
            ("max_distance_penalty", self.max_distance_penalty),
            ("minutes_per_time_point", self.minutes_per_time_point),
            ("max_time_penalty", self.max_time_penalty),
            ("gap_filling_weight", self.gap_filling_weight),
            ("max_gap_filling_bonus", self.max_gap_filling_bonus),
            ("clustering_weight", self.clustering_weight),
            ("max_clustering_bonus", self.max_clustering_bonus),
            ("schedule_weight", self.schedule_weight),
            ("max_schedule_bonus", self.max_schedule_bonus),
            ("date_coverage_weight", self.date_coverage_weight),
            ("max_date_coverage_bonus", self.max_date_coverage_bonus),
        ]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawScoreWeights {
    base: f64,
    km_per_distance_point: f64,
    max_distance_penalty: f64,
    minutes_per_time_point: f64,
    max_time_penalty: f64,
    gap_filling_weight: f64,
    max_gap_filling_bonus: f64,
    clustering_weight: f64,
    max_clustering_bonus: f64,
    schedule_weight: f64,
    max_schedule_bonus: f64,
    date_coverage_weight: f64,
    max_date_coverage_bonus: f64,
}

#[cfg(feature = "serde")]
impl Default for RawScoreWeights {
    fn default() -> Self {
        let defaults = ScoreWeights::default();
        Self {
            base: defaults.base,
            km_per_distance_point: defaults.km_per_distance_point,
            max_distance_penalty: defaults.max_distance_penalty,
            minutes_per_time_point: defaults.minutes_per_time_point,
            max_time_penalty: defaults.max_time_penalty,
            gap_filling_weight: defaults.gap_filling_weight,
            max_gap_filling_bonus: defaults.max_gap_filling_bonus,
            clustering_weight: defaults.clustering_weight,
            max_clustering_bonus: defaults.max_clustering_bonus,
            schedule_weight: defaults.schedule_weight,
            max_schedule_bonus: defaults.max_schedule_bonus,
            date_coverage_weight: defaults.date_coverage_weight,
            max_date_coverage_bonus: defaults.max_date_coverage_bonus,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawScoreWeights> for ScoreWeights {
    type Error = ScoreWeightsError;

    fn try_from(raw: RawScoreWeights) -> Result<Self, Self::Error> {
        let weights = Self {
            base: raw.base,
            km_per_distance_point: raw.km_per_distance_point,
            max_distance_penalty: raw.max_distance_penalty,
            minutes_per_time_point: raw.minutes_per_time_point,
            max_time_penalty: raw.max_time_penalty,
            gap_filling_weight: raw.gap_filling_weight,
            max_gap_filling_bonus: raw.max_gap_filling_bonus,
            clustering_weight: raw.clustering_weight,
            max_clustering_bonus: raw.max_clustering_bonus,
            schedule_weight: raw.schedule_weight,
            max_schedule_bonus: raw.max_schedule_bonus,
            date_coverage_weight: raw.date_coverage_weight,
            max_date_coverage_bonus: raw.max_date_coverage_bonus,
        };
        weights.validate()?;
        Ok(weights)
    }
}
