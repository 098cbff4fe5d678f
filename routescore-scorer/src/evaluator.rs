//! Evaluate whole routes and compare a candidate against the current one.

use std::collections::HashSet;

use log::{debug, warn};
use routescore_core::{
    DistanceMetrics, FixedStopViolation, Route, RouteSignal, StopId, TravelTimeConfig,
};

use crate::{
    ClusteringSignal, ComparisonError, DateCoverageSignal, OptimizationScoreInput,
    ScheduleEfficiencySignal, ScoreBreakdown, ScoreInputError, ScoreWeights, ScoreWeightsError,
    score_breakdown,
};

/// The three 0-100 sub-scores of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignalScores {
    /// Geographic clustering score.
    pub clustering: u8,
    /// Schedule efficiency score.
    pub schedule_efficiency: u8,
    /// Date coverage score.
    pub date_coverage: u8,
}

impl SignalScores {
    /// Run every signal calculator over `route`.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        Self {
            clustering: ClusteringSignal.score(route),
            schedule_efficiency: ScheduleEfficiencySignal.score(route),
            date_coverage: DateCoverageSignal.score(route),
        }
    }
}

/// Everything computed for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteEvaluation {
    /// Distance and travel-time totals.
    pub metrics: DistanceMetrics,
    /// Sub-scores fed into the composite.
    pub signals: SignalScores,
    /// Terms of the composite score.
    pub breakdown: ScoreBreakdown,
    /// Final optimization score in `0..=100`.
    pub score: u8,
}

/// The current route and a candidate, evaluated side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteComparison {
    /// Evaluation of the route as it stands.
    pub current: RouteEvaluation,
    /// Evaluation of the proposed reordering.
    pub candidate: RouteEvaluation,
    /// Fixed stops the candidate moved, rescheduled or dropped.
    pub fixed_stop_violations: Vec<FixedStopViolation>,
}

impl RouteComparison {
    /// Candidate score minus current score.
    #[must_use]
    pub fn score_delta(&self) -> i16 {
        i16::from(self.candidate.score) - i16::from(self.current.score)
    }

    /// Whether the candidate scores strictly higher.
    #[must_use]
    pub const fn candidate_is_better(&self) -> bool {
        self.candidate.score > self.current.score
    }

    /// Kilometres saved by the candidate; negative when it drives further.
    #[expect(clippy::float_arithmetic, reason = "difference of two distances")]
    #[must_use]
    pub fn distance_saved_km(&self) -> f64 {
        self.current.metrics.total_distance_km - self.candidate.metrics.total_distance_km
    }

    /// Whether every fixed stop kept its position and date.
    #[must_use]
    pub fn respects_fixed_stops(&self) -> bool {
        self.fixed_stop_violations.is_empty()
    }
}

/// Scores routes under one travel-time and weighting configuration.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, Route, Stop};
/// use routescore_scorer::RouteEvaluator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = Route::new(vec![
///     Stop::new("sf").at(Coordinate::new(37.7749, -122.4194)?),
///     Stop::new("oakland").at(Coordinate::new(37.8044, -122.2712)?),
/// ])?;
/// let evaluation = RouteEvaluator::default().evaluate(&route);
/// assert_eq!(evaluation.signals.clustering, 50);
/// assert_eq!(evaluation.signals.schedule_efficiency, 40);
/// assert_eq!(evaluation.score, 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RouteEvaluator {
    travel: TravelTimeConfig,
    weights: ScoreWeights,
}

impl RouteEvaluator {
    /// Construct an evaluator with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when `weights` fails validation.
    pub fn new(travel: TravelTimeConfig, weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        weights.validate()?;
        Ok(Self { travel, weights })
    }

    /// Travel-time assumptions in use.
    #[must_use]
    pub const fn travel(&self) -> &TravelTimeConfig {
        &self.travel
    }

    /// Scoring weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Evaluate `route` with no gap-filling signal.
    #[must_use]
    pub fn evaluate(&self, route: &Route) -> RouteEvaluation {
        let (metrics, signals, input) = self.measure(route);
        self.finish(route, metrics, signals, &input)
    }

    /// Evaluate `route` with an external 0-100 gap-filling quality.
    ///
    /// # Errors
    /// Returns [`ScoreInputError::SubScoreOutOfRange`] when `quality`
    /// exceeds 100.
    pub fn evaluate_with_gap_filling(
        &self,
        route: &Route,
        quality: u8,
    ) -> Result<RouteEvaluation, ScoreInputError> {
        let (metrics, signals, input) = self.measure(route);
        let credited = input.with_gap_filling_quality(quality)?;
        Ok(self.finish(route, metrics, signals, &credited))
    }

    /// Evaluate both routes and report how the candidate differs.
    ///
    /// # Errors
    /// Returns [`ComparisonError::StopSetMismatch`] when the routes do not
    /// visit the same stops, since their scores would not be comparable.
    pub fn compare(
        &self,
        current: &Route,
        candidate: &Route,
    ) -> Result<RouteComparison, ComparisonError> {
        self.compare_with_gap_filling(current, candidate, 0)
    }

    /// As [`RouteEvaluator::compare`], crediting the candidate with an
    /// external gap-filling quality.
    ///
    /// # Errors
    /// Returns [`ComparisonError::StopSetMismatch`] for differing stop sets
    /// and [`ComparisonError::Input`] when `quality` exceeds 100.
    pub fn compare_with_gap_filling(
        &self,
        current: &Route,
        candidate: &Route,
        quality: u8,
    ) -> Result<RouteComparison, ComparisonError> {
        ensure_same_stops(current, candidate)?;

        let comparison = RouteComparison {
            current: self.evaluate(current),
            candidate: self.evaluate_with_gap_filling(candidate, quality)?,
            fixed_stop_violations: current.fixed_stop_violations(candidate),
        };
        if !comparison.respects_fixed_stops() {
            warn!(
                "candidate route disturbs {} fixed stop(s)",
                comparison.fixed_stop_violations.len()
            );
        }
        debug!(
            "candidate scores {} against current {} ({:+})",
            comparison.candidate.score,
            comparison.current.score,
            comparison.score_delta()
        );
        Ok(comparison)
    }

    fn measure(&self, route: &Route) -> (DistanceMetrics, SignalScores, OptimizationScoreInput) {
        let metrics = DistanceMetrics::for_route(route, &self.travel);
        let signals = SignalScores::for_route(route);
        // Signals are sanitised into 0..=100 and distances are finite sums of
        // non-negative terms, so the checked constructor cannot fail here.
        let input = OptimizationScoreInput::trusted(
            metrics.total_distance_km,
            metrics.total_travel_time_minutes,
            signals,
        );
        (metrics, signals, input)
    }

    fn finish(
        &self,
        route: &Route,
        metrics: DistanceMetrics,
        signals: SignalScores,
        input: &OptimizationScoreInput,
    ) -> RouteEvaluation {
        let breakdown = score_breakdown(input, &self.weights);
        debug!(
            "evaluated {} stop(s): {:.1} km, {} min, signals {:?}, score {}",
            route.len(),
            metrics.total_distance_km,
            metrics.total_travel_time_minutes,
            signals,
            breakdown.score
        );
        RouteEvaluation {
            metrics,
            signals,
            breakdown,
            score: breakdown.score,
        }
    }
}

fn ensure_same_stops(current: &Route, candidate: &Route) -> Result<(), ComparisonError> {
    if current.has_same_stops_as(candidate) {
        return Ok(());
    }
    let current_ids: HashSet<&StopId> = current.stops().iter().map(|s| s.id()).collect();
    let candidate_ids: HashSet<&StopId> = candidate.stops().iter().map(|s| s.id()).collect();
    let missing_from_candidate = current
        .stops()
        .iter()
        .map(|s| s.id())
        .filter(|id| !candidate_ids.contains(id))
        .cloned()
        .collect();
    let unexpected_in_candidate = candidate
        .stops()
        .iter()
        .map(|s| s.id())
        .filter(|id| !current_ids.contains(id))
        .cloned()
        .collect();
    Err(ComparisonError::StopSetMismatch {
        missing_from_candidate,
        unexpected_in_candidate,
    })
}
