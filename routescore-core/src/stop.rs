//! A single venue appearance within a tour.

use std::fmt;

use chrono::NaiveDate;

use crate::Coordinate;

/// Caller-assigned identifier of a [`Stop`], unique within a route.
///
/// # Examples
/// ```
/// use routescore_core::StopId;
///
/// let id = StopId::from("la-forum");
/// assert_eq!(id.as_str(), "la-forum");
/// assert_eq!(id.to_string(), "la-forum");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StopId(String);

impl StopId {
    /// Construct an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One tour venue appearance.
///
/// Location and date are optional: a stop may be pencilled in before its venue
/// or day is known. A `fixed` stop is a confirmed booking whose date and
/// position must survive any reordering applied by the caller.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use routescore_core::{Coordinate, Stop};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).ok_or("bad date")?;
/// let stop = Stop::new("chicago")
///     .at(Coordinate::new(41.8781, -87.6298)?)
///     .on(date)
///     .fixed();
///
/// assert!(stop.is_fixed());
/// assert_eq!(stop.date(), Some(date));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    id: StopId,
    #[cfg_attr(feature = "serde", serde(default))]
    location: Option<Coordinate>,
    #[cfg_attr(feature = "serde", serde(default))]
    date: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    fixed: bool,
}

impl Stop {
    /// Construct a movable stop with no location and no date.
    pub fn new(id: impl Into<StopId>) -> Self {
        Self {
            id: id.into(),
            location: None,
            date: None,
            fixed: false,
        }
    }

    /// Set the stop's location.
    #[must_use]
    pub fn at(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the stop's calendar date.
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Mark the stop as a confirmed booking.
    #[must_use]
    pub fn fixed(self) -> Self {
        self.with_fixed(true)
    }

    /// Set the fixed flag explicitly.
    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// The stop identifier.
    #[must_use]
    pub const fn id(&self) -> &StopId {
        &self.id
    }

    /// The stop's location, if known.
    #[must_use]
    pub const fn location(&self) -> Option<&Coordinate> {
        self.location.as_ref()
    }

    /// The stop's date, if assigned.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Whether the stop is a confirmed booking.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }
}
