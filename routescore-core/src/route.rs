//! Ordered tour itineraries under evaluation.
//!
//! A [`Route`] owns its stops in visiting order and guarantees that stop
//! identifiers are unique. It has no identity beyond that order: the same
//! stops in a different order form a different candidate.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::{DistanceEstimate, Stop, StopId};

/// Errors returned by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two stops shared an identifier.
    #[error("stop id `{0}` appears more than once in the route")]
    DuplicateStop(StopId),
}

/// An ordered sequence of stops.
///
/// # Examples
/// ```
/// use routescore_core::{Route, RouteError, Stop, StopId};
///
/// let route = Route::new(vec![Stop::new("a"), Stop::new("b")])?;
/// assert_eq!(route.len(), 2);
///
/// let err = Route::new(vec![Stop::new("a"), Stop::new("a")]).unwrap_err();
/// assert_eq!(err, RouteError::DuplicateStop(StopId::from("a")));
/// # Ok::<(), RouteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Stop>", into = "Vec<Stop>")
)]
pub struct Route {
    stops: Vec<Stop>,
}

/// A consecutive pair of stops and the distance between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    /// Departure stop.
    pub from: &'a Stop,
    /// Arrival stop.
    pub to: &'a Stop,
    /// Great-circle distance, unknown if either stop lacks a location.
    pub distance: DistanceEstimate,
}

/// How a candidate route treats a fixed stop differently from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedStopViolation {
    /// The fixed stop is absent from the candidate.
    Missing(StopId),
    /// The fixed stop sits at a different index.
    Moved {
        /// Identifier of the fixed stop.
        id: StopId,
        /// Index in the current route.
        from: usize,
        /// Index in the candidate route.
        to: usize,
    },
    /// The fixed stop carries a different date.
    Rescheduled {
        /// Identifier of the fixed stop.
        id: StopId,
        /// Date in the current route.
        from: Option<NaiveDate>,
        /// Date in the candidate route.
        to: Option<NaiveDate>,
    },
}

impl Route {
    /// Validate and construct a route from stops in visiting order.
    ///
    /// # Errors
    /// Returns [`RouteError::DuplicateStop`] for the first repeated id.
    pub fn new(stops: Vec<Stop>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(stop.id()) {
                return Err(RouteError::DuplicateStop(stop.id().clone()));
            }
        }
        Ok(Self { stops })
    }

    /// Construct a route with no stops.
    #[must_use]
    pub const fn empty() -> Self {
        Self { stops: Vec::new() }
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stop at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Index of the stop with `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: &StopId) -> Option<usize> {
        self.stops.iter().position(|stop| stop.id() == id)
    }

    /// Whether a stop with `id` is part of the route.
    #[must_use]
    pub fn contains(&self, id: &StopId) -> bool {
        self.position_of(id).is_some()
    }

    /// Confirmed bookings, in route order.
    pub fn fixed_stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|stop| stop.is_fixed())
    }

    /// Stops that carry a date, in route order.
    pub fn dated_stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|stop| stop.date().is_some())
    }

    /// Consecutive stop pairs with their distance, in route order.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.stops.windows(2).filter_map(|pair| match pair {
            [from, to] => Some(Segment {
                from,
                to,
                distance: DistanceEstimate::between(from.location(), to.location()),
            }),
            _ => None,
        })
    }

    /// Whether both routes hold exactly the same stop identifiers.
    ///
    /// Order is ignored; only scores of routes with the same stops are
    /// comparable.
    #[must_use]
    pub fn has_same_stops_as(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let ours: HashSet<&StopId> = self.stops.iter().map(Stop::id).collect();
        other.stops.iter().all(|stop| ours.contains(stop.id()))
    }

    /// Report fixed stops of `self` that `candidate` moved, rescheduled or
    /// dropped.
    ///
    /// Nothing is enforced: deciding whether to reject the candidate is up
    /// to the caller.
    ///
    /// # Examples
    /// ```
    /// use routescore_core::{FixedStopViolation, Route, Stop, StopId};
    ///
    /// let current = Route::new(vec![Stop::new("a").fixed(), Stop::new("b")])?;
    /// let candidate = Route::new(vec![Stop::new("b"), Stop::new("a").fixed()])?;
    /// assert_eq!(
    ///     current.fixed_stop_violations(&candidate),
    ///     vec![FixedStopViolation::Moved { id: StopId::from("a"), from: 0, to: 1 }],
    /// );
    /// # Ok::<(), routescore_core::RouteError>(())
    /// ```
    #[must_use]
    pub fn fixed_stop_violations(&self, candidate: &Self) -> Vec<FixedStopViolation> {
        let index: HashMap<&StopId, (usize, &Stop)> = candidate
            .stops
            .iter()
            .enumerate()
            .map(|(position, stop)| (stop.id(), (position, stop)))
            .collect();

        let mut violations = Vec::new();
        for (position, stop) in self.stops.iter().enumerate() {
            if !stop.is_fixed() {
                continue;
            }
            let Some(&(candidate_position, candidate_stop)) = index.get(stop.id()) else {
                violations.push(FixedStopViolation::Missing(stop.id().clone()));
                continue;
            };
            if candidate_position != position {
                violations.push(FixedStopViolation::Moved {
                    id: stop.id().clone(),
                    from: position,
                    to: candidate_position,
                });
            }
            if candidate_stop.date() != stop.date() {
                violations.push(FixedStopViolation::Rescheduled {
                    id: stop.id().clone(),
                    from: stop.date(),
                    to: candidate_stop.date(),
                });
            }
        }
        violations
    }
}

impl TryFrom<Vec<Stop>> for Route {
    type Error = RouteError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Route> for Vec<Stop> {
    fn from(route: Route) -> Self {
        route.stops
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;
    use rstest::{fixture, rstest};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).expect("valid date")
    }

    #[fixture]
    fn current() -> Route {
        Route::new(vec![
            Stop::new("a").on(date(1)).fixed(),
            Stop::new("b"),
            Stop::new("c").on(date(5)).fixed(),
        ])
        .expect("unique ids")
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let result = Route::new(vec![Stop::new("x"), Stop::new("y"), Stop::new("x")]);
        assert_eq!(result, Err(RouteError::DuplicateStop(StopId::from("x"))));
    }

    #[rstest]
    fn empty_route_has_no_segments() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.segments().count(), 0);
    }

    #[rstest]
    fn segments_follow_route_order() {
        let here = Coordinate::new(0.0, 0.0).expect("valid coordinate");
        let stops = vec![Stop::new("a").at(here), Stop::new("b"), Stop::new("c")];
        let route = Route::new(stops).expect("unique ids");
        let segments: Vec<_> = route.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from.id().as_str(), "a");
        assert_eq!(segments[1].to.id().as_str(), "c");
        assert!(segments.iter().all(|s| !s.distance.is_known()));
    }

    #[rstest]
    fn lookup_helpers(current: Route) {
        assert_eq!(current.position_of(&StopId::from("c")), Some(2));
        assert!(current.contains(&StopId::from("b")));
        assert!(!current.contains(&StopId::from("z")));
        assert_eq!(current.fixed_stops().count(), 2);
        assert_eq!(current.dated_stops().count(), 2);
        let second = current.get(1).map(|s| s.id().as_str());
        assert_eq!(second, Some("b"));
    }

    #[rstest]
    fn same_stops_ignores_order(current: Route) {
        let reordered = Route::new(vec![Stop::new("c"), Stop::new("a"), Stop::new("b")])
            .expect("unique ids");
        let different = Route::new(vec![Stop::new("a"), Stop::new("b"), Stop::new("d")])
            .expect("unique ids");
        assert!(current.has_same_stops_as(&reordered));
        assert!(!current.has_same_stops_as(&different));
        assert!(!current.has_same_stops_as(&Route::empty()));
    }

    #[rstest]
    fn unchanged_candidate_has_no_violations(current: Route) {
        assert!(current.fixed_stop_violations(&current).is_empty());
    }

    #[rstest]
    fn movable_stop_changes_are_not_violations(current: Route) {
        let candidate = Route::new(vec![
            Stop::new("a").on(date(1)).fixed(),
            Stop::new("b").on(date(3)),
            Stop::new("c").on(date(5)).fixed(),
        ])
        .expect("unique ids");
        assert!(current.fixed_stop_violations(&candidate).is_empty());
    }

    #[rstest]
    fn reports_rescheduled_and_missing(current: Route) {
        let stops = vec![Stop::new("a").on(date(2)).fixed(), Stop::new("b")];
        let candidate = Route::new(stops).expect("unique ids");
        assert_eq!(
            current.fixed_stop_violations(&candidate),
            vec![
                FixedStopViolation::Rescheduled {
                    id: StopId::from("a"),
                    from: Some(date(1)),
                    to: Some(date(2)),
                },
                FixedStopViolation::Missing(StopId::from("c")),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_rejects_duplicates() {
        let result = serde_json::from_str::<Route>(r#"[{"id": "a"}, {"id": "a"}]"#);
        assert!(result.is_err());
    }
}
