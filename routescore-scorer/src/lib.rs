//! Route quality scoring for routescore.
//!
//! The crate turns a [`Route`](routescore_core::Route) into a single 0-100
//! optimization score. It provides two layers:
//! - **Signal calculators** implement [`RouteSignal`](routescore_core::RouteSignal)
//!   and each rate one aspect of a route: how tightly consecutive stops
//!   cluster ([`ClusteringSignal`]), how evenly dated stops are spaced
//!   ([`ScheduleEfficiencySignal`]) and how many stops already carry a date
//!   ([`DateCoverageSignal`]).
//! - **The composite scorer** combines distance, travel time and the signals
//!   into [`optimization_score`] using tunable [`ScoreWeights`].
//!   [`RouteEvaluator`] wires both layers together and compares a candidate
//!   ordering against the current one.
//!
//! # Examples
//!
//! ```
//! use routescore_core::{Coordinate, Route, Stop};
//! use routescore_scorer::score_route;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = Route::new(vec![
//!     Stop::new("la").at(Coordinate::new(34.0522, -118.2437)?),
//!     Stop::new("ny").at(Coordinate::new(40.7128, -74.0060)?),
//! ])?;
//! assert!(score_route(&route) < 100);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use routescore_core::Route;

mod clustering;
mod composite;
mod coverage;
mod error;
mod evaluator;
mod input;
mod schedule;
mod weights;

pub use clustering::{ClusteringSignal, NEUTRAL_CLUSTERING_SCORE, clustering_score};
pub use composite::{ScoreBreakdown, optimization_score, score_breakdown};
pub use coverage::{DateCoverageSignal, date_coverage_score};
pub use error::{ComparisonError, ScoreInputError, ScoreWeightsError};
pub use evaluator::{RouteComparison, RouteEvaluation, RouteEvaluator, SignalScores};
pub use input::OptimizationScoreInput;
pub use schedule::{
    INSUFFICIENT_SCHEDULE_SCORE, ScheduleEfficiencySignal, schedule_efficiency_score,
};
pub use weights::ScoreWeights;

/// Score `route` with the default travel-time assumptions and weights.
#[must_use]
pub fn score_route(route: &Route) -> u8 {
    RouteEvaluator::default().evaluate(route).score
}

/// `numerator` as a percentage of `denominator`; zero when there is nothing
/// to count.
#[expect(
    clippy::float_arithmetic,
    reason = "signals are expressed as percentages"
)]
pub(crate) fn percentage(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    100.0 * f64::from(numerator) / f64::from(denominator)
}
