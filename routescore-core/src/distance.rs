//! Great-circle distance between stop locations.
//!
//! Distances use the Haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Results are never rounded here so that long routes do
//! not accumulate rounding error.
//!
//! A missing location on either side yields [`DistanceEstimate::Unknown`].
//! [`distance_km`] collapses that to `0.0`, which callers must read as
//! "unknown" rather than "co-located".

use crate::Coordinate;

/// Mean Earth radius used by every distance computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two known coordinates, in kilometres.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, haversine_km};
///
/// # fn main() -> Result<(), routescore_core::CoordinateError> {
/// let a = Coordinate::new(0.0, 0.0)?;
/// let b = Coordinate::new(1.0, 0.0)?;
/// let km = haversine_km(&a, &b);
/// assert!((km - 111.2).abs() < 1.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is inherently floating-point"
)]
#[must_use]
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `h` a hair above 1 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Distance between two optional locations, with absence kept explicit.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, DistanceEstimate};
///
/// # fn main() -> Result<(), routescore_core::CoordinateError> {
/// let a = Coordinate::new(0.0, 0.0)?;
/// assert_eq!(DistanceEstimate::between(Some(&a), None), DistanceEstimate::Unknown);
/// assert_eq!(DistanceEstimate::between(Some(&a), Some(&a)).km(), Some(0.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceEstimate {
    /// Both endpoints were located; the value is in kilometres.
    Known(f64),
    /// At least one endpoint has no location.
    Unknown,
}

impl DistanceEstimate {
    /// Estimate the distance between two optional coordinates.
    #[must_use]
    pub fn between(a: Option<&Coordinate>, b: Option<&Coordinate>) -> Self {
        match (a, b) {
            (Some(from), Some(to)) => Self::Known(haversine_km(from, to)),
            _ => Self::Unknown,
        }
    }

    /// The distance in kilometres, or `None` when unknown.
    #[must_use]
    pub const fn km(self) -> Option<f64> {
        match self {
            Self::Known(km) => Some(km),
            Self::Unknown => None,
        }
    }

    /// The distance in kilometres, with unknown collapsed to `0.0`.
    #[must_use]
    pub const fn km_or_zero(self) -> f64 {
        match self {
            Self::Known(km) => km,
            Self::Unknown => 0.0,
        }
    }

    /// Whether both endpoints were located.
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Distance in kilometres between two optional coordinates.
///
/// Returns `0.0` when either coordinate is absent.
///
/// # Examples
/// ```
/// use routescore_core::{Coordinate, distance_km};
///
/// # fn main() -> Result<(), routescore_core::CoordinateError> {
/// let ny = Coordinate::new(40.7128, -74.0060)?;
/// assert_eq!(distance_km(Some(&ny), None), 0.0);
/// assert_eq!(distance_km(Some(&ny), Some(&ny)), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distance_km(a: Option<&Coordinate>, b: Option<&Coordinate>) -> f64 {
    DistanceEstimate::between(a, b).km_or_zero()
}
