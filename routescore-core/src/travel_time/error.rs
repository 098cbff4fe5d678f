use thiserror::Error;

/// Errors from [`crate::travel_time::TravelTimeConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TravelTimeConfigError {
    /// Average speed was zero, negative or not finite.
    #[error("average speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),
    /// Buffer factor was zero, negative or not finite.
    #[error("buffer factor must be positive, got {0}")]
    InvalidBufferFactor(f64),
}
