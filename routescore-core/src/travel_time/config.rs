//! Travel-time assumptions and the distance-to-minutes conversion.

use super::error::TravelTimeConfigError;

/// Default average road speed, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 65.0;

/// Default multiplier applied for rest stops and traffic.
pub const DEFAULT_BUFFER_FACTOR: f64 = 1.2;

/// Assumptions used to turn kilometres into driving minutes.
///
/// The default is 65 km/h with a 1.2 buffer.
///
/// # Examples
/// ```
/// use routescore_core::TravelTimeConfig;
///
/// let config = TravelTimeConfig::default();
/// // 65 km at 65 km/h is one hour, plus the 20% buffer.
/// assert_eq!(config.travel_time_minutes(65.0), 72);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTravelTimeConfig")
)]
pub struct TravelTimeConfig {
    average_speed_kmh: f64,
    buffer_factor: f64,
}

impl Default for TravelTimeConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            buffer_factor: DEFAULT_BUFFER_FACTOR,
        }
    }
}

impl TravelTimeConfig {
    /// Validate and construct a configuration.
    ///
    /// # Errors
    /// Returns [`TravelTimeConfigError`] when either value is not a positive,
    /// finite number.
    ///
    /// # Examples
    /// ```
    /// use routescore_core::{TravelTimeConfig, TravelTimeConfigError};
    ///
    /// assert!(TravelTimeConfig::new(70.0, 1.0).is_ok());
    /// assert_eq!(
    ///     TravelTimeConfig::new(0.0, 1.0),
    ///     Err(TravelTimeConfigError::InvalidSpeed(0.0)),
    /// );
    /// ```
    pub fn new(average_speed_kmh: f64, buffer_factor: f64) -> Result<Self, TravelTimeConfigError> {
        if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
            return Err(TravelTimeConfigError::InvalidSpeed(average_speed_kmh));
        }
        if !buffer_factor.is_finite() || buffer_factor <= 0.0 {
            return Err(TravelTimeConfigError::InvalidBufferFactor(buffer_factor));
        }
        Ok(Self {
            average_speed_kmh,
            buffer_factor,
        })
    }

    /// Assumed average road speed in km/h.
    #[must_use]
    pub const fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    /// Multiplier applied on top of pure driving time.
    #[must_use]
    pub const fn buffer_factor(&self) -> f64 {
        self.buffer_factor
    }

    /// Estimated driving time for `km`, rounded to whole minutes.
    ///
    /// Negative or non-finite distances are treated as zero.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "minutes are rounded from a non-negative float; `as` saturates at u32::MAX"
    )]
    #[must_use]
    pub fn travel_time_minutes(&self, km: f64) -> u32 {
        if !km.is_finite() || km <= 0.0 {
            return 0;
        }
        let minutes = km / self.average_speed_kmh * 60.0 * self.buffer_factor;
        minutes.round() as u32
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawTravelTimeConfig {
    average_speed_kmh: f64,
    buffer_factor: f64,
}

#[cfg(feature = "serde")]
impl Default for RawTravelTimeConfig {
    fn default() -> Self {
        let defaults = TravelTimeConfig::default();
        Self {
            average_speed_kmh: defaults.average_speed_kmh,
            buffer_factor: defaults.buffer_factor,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawTravelTimeConfig> for TravelTimeConfig {
    type Error = TravelTimeConfigError;

    fn try_from(raw: RawTravelTimeConfig) -> Result<Self, Self::Error> {
        Self::new(raw.average_speed_kmh, raw.buffer_factor)
    }
}
