//! Total distance and driving time across a route.
//!
//! Segments are taken in route order; nothing here reorders stops. A segment
//! with a missing location on either end is counted as unknown and adds zero
//! kilometres to the collapsed totals, which understates the true distance
//! when data is incomplete.

use log::{trace, warn};

use crate::{DistanceEstimate, Route, TravelTimeConfig};

/// Per-route distance with known and unknown segments kept apart.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, DistanceEstimate, Route, RouteDistance, Stop};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = Route::new(vec![
///     Stop::new("a").at(Coordinate::new(0.0, 0.0)?),
///     Stop::new("b").at(Coordinate::new(1.0, 0.0)?),
///     Stop::new("c"),
/// ])?;
/// let distance = RouteDistance::for_route(&route);
/// assert_eq!(distance.unknown_segments(), 1);
/// assert_eq!(distance.total_km(), DistanceEstimate::Unknown);
/// assert!((distance.total_km_or_zero() - 111.2).abs() < 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteDistance {
    known_km: f64,
    known_segments: usize,
    unknown_segments: usize,
}

impl RouteDistance {
    /// Measure every consecutive segment of `route`.
    #[expect(
        clippy::float_arithmetic,
        reason = "segment distances are summed as floats"
    )]
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        let mut total = Self::default();
        for segment in route.segments() {
            match segment.distance {
                DistanceEstimate::Known(km) => {
                    trace!(
                        "segment {} -> {}: {km:.1} km",
                        segment.from.id(),
                        segment.to.id()
                    );
                    total.known_km += km;
                    total.known_segments += 1;
                }
                DistanceEstimate::Unknown => {
                    trace!(
                        "segment {} -> {}: location missing",
                        segment.from.id(),
                        segment.to.id()
                    );
                    total.unknown_segments += 1;
                }
            }
        }
        if total.unknown_segments > 0 {
            warn!(
                "{} of {} route segments lack a location; distance is understated",
                total.unknown_segments,
                total.segment_count()
            );
        }
        total
    }

    /// Sum of known segment distances in kilometres.
    #[must_use]
    pub const fn known_km(&self) -> f64 {
        self.known_km
    }

    /// Number of segments with both endpoints located.
    #[must_use]
    pub const fn known_segments(&self) -> usize {
        self.known_segments
    }

    /// Number of segments with at least one endpoint unlocated.
    #[must_use]
    pub const fn unknown_segments(&self) -> usize {
        self.unknown_segments
    }

    /// Total number of segments, `len - 1` for a non-empty route.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.known_segments + self.unknown_segments
    }

    /// Whether any segment lacked a location.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unknown_segments == 0
    }

    /// Total distance, or [`DistanceEstimate::Unknown`] if any segment was.
    #[must_use]
    pub const fn total_km(&self) -> DistanceEstimate {
        if self.is_complete() {
            DistanceEstimate::Known(self.known_km)
        } else {
            DistanceEstimate::Unknown
        }
    }

    /// Total distance with unknown segments counted as zero.
    #[must_use]
    pub const fn total_km_or_zero(&self) -> f64 {
        self.known_km
    }
}

/// Total great-circle distance along `route`, in kilometres.
///
/// Routes with fewer than two stops return `0.0`.
#[must_use]
pub fn total_distance(route: &Route) -> f64 {
    RouteDistance::for_route(route).total_km_or_zero()
}

/// Total driving time along `route`, in minutes.
///
/// Each segment is converted and rounded separately, then summed. Unknown
/// segments contribute zero.
#[must_use]
pub fn total_travel_time(route: &Route, config: &TravelTimeConfig) -> u32 {
    route
        .segments()
        .map(|segment| config.travel_time_minutes(segment.distance.km_or_zero()))
        .fold(0_u32, u32::saturating_add)
}

/// Distance and travel-time totals for one route.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, DistanceMetrics, Route, Stop, TravelTimeConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = Route::new(vec![
///     Stop::new("a").at(Coordinate::new(0.0, 0.0)?),
///     Stop::new("b").at(Coordinate::new(1.0, 0.0)?),
/// ])?;
/// let metrics = DistanceMetrics::for_route(&route, &TravelTimeConfig::default());
/// assert!((metrics.total_distance_km - 111.2).abs() < 1.0);
/// assert_eq!(metrics.total_travel_time_minutes, 123);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMetrics {
    /// Sum of segment distances; unknown segments add zero.
    pub total_distance_km: f64,
    /// Sum of per-segment driving minutes.
    pub total_travel_time_minutes: u32,
    /// Segments whose distance could not be measured.
    pub unknown_segments: usize,
}

impl DistanceMetrics {
    /// Aggregate distance and travel time for `route`.
    #[must_use]
    pub fn for_route(route: &Route, config: &TravelTimeConfig) -> Self {
        let distance = RouteDistance::for_route(route);
        Self {
            total_distance_km: distance.total_km_or_zero(),
            total_travel_time_minutes: total_travel_time(route, config),
            unknown_segments: distance.unknown_segments(),
        }
    }
}
