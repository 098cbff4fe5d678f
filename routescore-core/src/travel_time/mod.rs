//! Estimate road travel time from great-circle distance.
//!
//! [`TravelTimeConfig`] carries the assumed average road speed and a buffer
//! multiplier for rest stops and traffic. Both are explicit so that every
//! aggregation in a request uses the same assumptions.

mod config;
mod error;

pub use config::{DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_BUFFER_FACTOR, TravelTimeConfig};
pub use error::TravelTimeConfigError;
