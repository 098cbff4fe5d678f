//! Error types raised at the scorer's construction boundaries.
#![forbid(unsafe_code)]

use routescore_core::StopId;
use thiserror::Error;

/// Errors returned while building an [`OptimizationScoreInput`](crate::OptimizationScoreInput).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreInputError {
    /// Total distance was negative, NaN or infinite.
    #[error("total distance must be a finite, non-negative number of km, got {0}")]
    InvalidDistance(f64),
    /// A 0-100 sub-score was above 100.
    #[error("{signal} score {value} is outside 0..=100")]
    SubScoreOutOfRange {
        /// Name of the offending signal.
        signal: &'static str,
        /// Value supplied by the caller.
        value: u8,
    },
}

/// Errors returned by [`ScoreWeights::validate`](crate::ScoreWeights::validate).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight or cap was negative, NaN or infinite.
    #[error("score weight `{field}` must be finite and non-negative, got {value}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Value found in the configuration.
        value: f64,
    },
    /// A divisor was zero, so the penalty would be undefined.
    #[error("score weight `{field}` must be greater than zero")]
    ZeroDivisor {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Errors returned by [`RouteEvaluator::compare`](crate::RouteEvaluator::compare).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    /// The routes do not cover the same stops, so their scores are not
    /// comparable.
    #[error(
        "routes hold different stops: {} missing from candidate, {} only in candidate",
        missing_from_candidate.len(),
        unexpected_in_candidate.len()
    )]
    StopSetMismatch {
        /// Stops of the current route absent from the candidate.
        missing_from_candidate: Vec<StopId>,
        /// Stops of the candidate absent from the current route.
        unexpected_in_candidate: Vec<StopId>,
    },
    /// The caller-supplied gap-filling quality was invalid.
    #[error(transparent)]
    Input(#[from] ScoreInputError),
}
