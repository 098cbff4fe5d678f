//! Facade crate for the routescore tour scoring engine.
//!
//! This crate re-exports the core route model and distance primitives
//! together with the scorer, so callers can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use routescore_engine::{Coordinate, Route, RouteEvaluator, Stop};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = Route::new(vec![
//!     Stop::new("sf").at(Coordinate::new(37.7749, -122.4194)?),
//!     Stop::new("sac").at(Coordinate::new(38.5816, -121.4944)?),
//! ])?;
//! let evaluation = RouteEvaluator::default().evaluate(&route);
//! assert!(evaluation.metrics.total_distance_km > 100.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use routescore_core::{
    Coordinate, CoordinateError, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_BUFFER_FACTOR,
    DistanceEstimate, DistanceMetrics, EARTH_RADIUS_KM, FixedStopViolation, Route, RouteDistance,
    RouteError, RouteSignal, Segment, Stop, StopId, TravelTimeConfig, TravelTimeConfigError,
    distance_km, haversine_km, total_distance, total_travel_time,
};

pub use routescore_scorer::{
    ClusteringSignal, ComparisonError, DateCoverageSignal, INSUFFICIENT_SCHEDULE_SCORE,
    NEUTRAL_CLUSTERING_SCORE, OptimizationScoreInput, RouteComparison, RouteEvaluation,
    RouteEvaluator, ScheduleEfficiencySignal, ScoreBreakdown, ScoreInputError, ScoreWeights,
    ScoreWeightsError, SignalScores, clustering_score, date_coverage_score, optimization_score,
    schedule_efficiency_score, score_breakdown, score_route,
};

#[cfg(feature = "test-support")]
pub use routescore_core::test_support;
