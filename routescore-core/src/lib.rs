//! Core domain types for the route scoring engine.
//!
//! Tours are modelled as ordered [`Route`]s of [`Stop`]s. Each stop may carry
//! a [`Coordinate`] and a date, and may be fixed (a confirmed booking). The
//! crate measures great-circle distance between stops and aggregates
//! distance and driving time along a route; scoring lives in
//! `routescore-scorer`.
//!
//! Constructors return `Result` so that contract violations such as an
//! out-of-range latitude or a repeated stop id surface at the boundary. Once
//! built, every computation is pure and infallible: missing locations or
//! dates degrade to documented neutral values instead of errors.
//!
//! # Examples
//!
//! ```
//! use routescore_core::{Coordinate, DistanceMetrics, Route, Stop, TravelTimeConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = Route::new(vec![
//!     Stop::new("sf").at(Coordinate::new(37.7749, -122.4194)?),
//!     Stop::new("oakland").at(Coordinate::new(37.8044, -122.2712)?),
//! ])?;
//! let metrics = DistanceMetrics::for_route(&route, &TravelTimeConfig::default());
//! assert!(metrics.total_distance_km > 13.0 && metrics.total_distance_km < 14.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod distance;
pub mod metrics;
pub mod route;
pub mod signal;
pub mod stop;
pub mod travel_time;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{DistanceEstimate, EARTH_RADIUS_KM, distance_km, haversine_km};
pub use metrics::{DistanceMetrics, RouteDistance, total_distance, total_travel_time};
pub use route::{FixedStopViolation, Route, RouteError, Segment};
pub use signal::RouteSignal;
pub use stop::{Stop, StopId};
pub use travel_time::{
    DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_BUFFER_FACTOR, TravelTimeConfig, TravelTimeConfigError,
};
