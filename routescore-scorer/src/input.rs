//! Inputs of the composite optimization score.

use routescore_core::DistanceMetrics;

use crate::{ScoreInputError, SignalScores};

/// Largest valid 0-100 sub-score.
const MAX_SUB_SCORE: u8 = 100;

/// Distance, time and sub-scores for one candidate route.
///
/// Built fresh for every scoring call. Construction validates the numbers;
/// the scorer itself trusts them.
///
/// # Examples
/// ```
/// use routescore_scorer::{OptimizationScoreInput, ScoreInputError};
///
/// let input = OptimizationScoreInput::new(250.0, 300, 80, 90, 100)?
///     .with_gap_filling_quality(40)?;
/// assert_eq!(input.gap_filling_quality(), 40);
///
/// assert_eq!(
///     OptimizationScoreInput::new(-1.0, 0, 0, 0, 0),
///     Err(ScoreInputError::InvalidDistance(-1.0)),
/// );
/// # Ok::<(), ScoreInputError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationScoreInput {
    total_distance_km: f64,
    total_travel_time_minutes: u32,
    clustering_score: u8,
    schedule_efficiency_score: u8,
    date_coverage_score: u8,
    gap_filling_quality: u8,
}

fn check_sub_score(signal: &'static str, value: u8) -> Result<u8, ScoreInputError> {
    if value > MAX_SUB_SCORE {
        return Err(ScoreInputError::SubScoreOutOfRange { signal, value });
    }
    Ok(value)
}

impl OptimizationScoreInput {
    /// Validate and bundle the five scoring inputs.
    ///
    /// Gap-filling quality starts at zero.
    ///
    /// # Errors
    /// Returns [`ScoreInputError`] for a negative or non-finite distance or a
    /// sub-score above 100.
    pub fn new(
        total_distance_km: f64,
        total_travel_time_minutes: u32,
        clustering_score: u8,
        schedule_efficiency_score: u8,
        date_coverage_score: u8,
    ) -> Result<Self, ScoreInputError> {
        if !total_distance_km.is_finite() || total_distance_km < 0.0 {
            return Err(ScoreInputError::InvalidDistance(total_distance_km));
        }
        Ok(Self {
            total_distance_km,
            total_travel_time_minutes,
            clustering_score: check_sub_score("clustering", clustering_score)?,
            schedule_efficiency_score: check_sub_score(
                "schedule_efficiency",
                schedule_efficiency_score,
            )?,
            date_coverage_score: check_sub_score("date_coverage", date_coverage_score)?,
            gap_filling_quality: 0,
        })
    }

    /// Bundle aggregated route metrics with the three sub-scores.
    ///
    /// # Errors
    /// As for [`OptimizationScoreInput::new`].
    pub fn from_metrics(
        metrics: &DistanceMetrics,
        clustering_score: u8,
        schedule_efficiency_score: u8,
        date_coverage_score: u8,
    ) -> Result<Self, ScoreInputError> {
        Self::new(
            metrics.total_distance_km,
            metrics.total_travel_time_minutes,
            clustering_score,
            schedule_efficiency_score,
            date_coverage_score,
        )
    }

    /// Bundle values already known to be in range, skipping validation.
    pub(crate) const fn trusted(
        total_distance_km: f64,
        total_travel_time_minutes: u32,
        signals: SignalScores,
    ) -> Self {
        Self {
            total_distance_km,
            total_travel_time_minutes,
            clustering_score: signals.clustering,
            schedule_efficiency_score: signals.schedule_efficiency,
            date_coverage_score: signals.date_coverage,
            gap_filling_quality: 0,
        }
    }

    /// Attach an external 0-100 signal of how well new stops fill schedule
    /// gaps.
    ///
    /// # Errors
    /// Returns [`ScoreInputError::SubScoreOutOfRange`] above 100.
    pub fn with_gap_filling_quality(mut self, quality: u8) -> Result<Self, ScoreInputError> {
        self.gap_filling_quality = check_sub_score("gap_filling", quality)?;
        Ok(self)
    }

    /// Total route distance in kilometres.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Total driving time in minutes.
    #[must_use]
    pub const fn total_travel_time_minutes(&self) -> u32 {
        self.total_travel_time_minutes
    }

    /// Geographic clustering sub-score.
    #[must_use]
    pub const fn clustering_score(&self) -> u8 {
        self.clustering_score
    }

    /// Schedule efficiency sub-score.
    #[must_use]
    pub const fn schedule_efficiency_score(&self) -> u8 {
        self.schedule_efficiency_score
    }

    /// Date coverage sub-score.
    #[must_use]
    pub const fn date_coverage_score(&self) -> u8 {
        self.date_coverage_score
    }

    /// External gap-filling quality, zero when the caller has none.
    #[must_use]
    pub const fn gap_filling_quality(&self) -> u8 {
        self.gap_filling_quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-0.5)]
    fn rejects_invalid_distance(#[case] km: f64) {
        assert!(matches!(
            OptimizationScoreInput::new(km, 0, 0, 0, 0),
            Err(ScoreInputError::InvalidDistance(_))
        ));
    }

    #[rstest]
    fn rejects_sub_score_above_hundred() {
        assert_eq!(
            OptimizationScoreInput::new(0.0, 0, 50, 101, 50),
            Err(ScoreInputError::SubScoreOutOfRange {
                signal: "schedule_efficiency",
                value: 101
            })
        );
    }

    #[rstest]
    fn rejects_gap_filling_above_hundred() {
        let input = OptimizationScoreInput::new(0.0, 0, 0, 0, 0).expect("valid input");
        assert!(input.with_gap_filling_quality(150).is_err());
    }

    #[rstest]
    fn builds_from_metrics() {
        let metrics = DistanceMetrics {
            total_distance_km: 120.5,
            total_travel_time_minutes: 133,
            unknown_segments: 0,
        };
        let input =
            OptimizationScoreInput::from_metrics(&metrics, 70, 100, 100).expect("valid input");
        assert_eq!(input.total_distance_km(), 120.5);
        assert_eq!(input.total_travel_time_minutes(), 133);
        assert_eq!(input.clustering_score(), 70);
        assert_eq!(input.gap_filling_quality(), 0);
    }
}
