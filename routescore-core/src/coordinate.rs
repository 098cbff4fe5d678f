//! Validated WGS84 positions for tour stops.

use geo::Coord;
use thiserror::Error;

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was NaN, infinite or outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90 degrees")]
    InvalidLatitude(f64),
    /// Longitude was NaN, infinite or outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180 degrees")]
    InvalidLongitude(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Stored as a [`geo::Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use routescore_core::Coordinate;
///
/// # fn main() -> Result<(), routescore_core::CoordinateError> {
/// let la = Coordinate::new(34.0522, -118.2437)?;
/// assert_eq!(la.latitude(), 34.0522);
/// assert_eq!(la.as_coord().x, -118.2437);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LatLon", into = "LatLon")
)]
pub struct Coordinate(Coord<f64>);

impl Coordinate {
    /// Validate and construct a coordinate from latitude and longitude.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is not finite or
    /// falls outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }
        Ok(Self(Coord {
            x: longitude,
            y: latitude,
        }))
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.0.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.0.x
    }

    /// Borrow the underlying `geo` coordinate.
    #[must_use]
    pub const fn as_coord(&self) -> Coord<f64> {
        self.0
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.0
    }
}

/// Wire form used by the `serde` feature: `{ "lat": .., "lon": .. }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LatLon> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: LatLon) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinate> for LatLon {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.latitude(),
            lon: coordinate.longitude(),
        }
    }
}
