//! Test-only fixtures: well-known city coordinates and route builders used by
//! unit, behaviour and property tests.

use chrono::{Days, NaiveDate};

use crate::{Coordinate, Route, Stop};

fn known(latitude: f64, longitude: f64) -> Coordinate {
    match Coordinate::new(latitude, longitude) {
        Ok(coordinate) => coordinate,
        Err(err) => panic!("fixture coordinate is invalid: {err}"),
    }
}

/// Downtown Los Angeles.
#[must_use]
pub fn los_angeles() -> Coordinate {
    known(34.0522, -118.2437)
}

/// Downtown Kansas City, Missouri.
#[must_use]
pub fn kansas_city() -> Coordinate {
    known(39.0997, -94.5786)
}

/// Lower Manhattan, New York.
#[must_use]
pub fn new_york() -> Coordinate {
    known(40.7128, -74.0060)
}

/// Downtown San Francisco.
#[must_use]
pub fn san_francisco() -> Coordinate {
    known(37.7749, -122.4194)
}

/// Downtown Oakland.
#[must_use]
pub fn oakland() -> Coordinate {
    known(37.8044, -122.2712)
}

/// Downtown San Jose.
#[must_use]
pub fn san_jose() -> Coordinate {
    known(37.3382, -121.8863)
}

/// Downtown Sacramento.
#[must_use]
pub fn sacramento() -> Coordinate {
    known(38.5816, -121.4944)
}

/// Tour opening night used as day zero by fixtures.
#[must_use]
pub fn opening_night() -> NaiveDate {
    match NaiveDate::from_ymd_opt(2025, 6, 1) {
        Some(date) => date,
        None => panic!("fixture date is invalid"),
    }
}

/// The date `offset` days after [`opening_night`].
#[must_use]
pub fn day(offset: u64) -> NaiveDate {
    match opening_night().checked_add_days(Days::new(offset)) {
        Some(date) => date,
        None => panic!("fixture date offset {offset} overflows"),
    }
}

/// Build a route, panicking on duplicate ids.
#[must_use]
pub fn route(stops: Vec<Stop>) -> Route {
    match Route::new(stops) {
        Ok(route) => route,
        Err(err) => panic!("fixture route is invalid: {err}"),
    }
}

/// Fixed LA show on day 0, an unscheduled Kansas City stop, fixed New York
/// show on day 20.
#[must_use]
pub fn transcontinental_route() -> Route {
    route(vec![
        Stop::new("los-angeles")
            .at(los_angeles())
            .on(day(0))
            .fixed(),
        Stop::new("kansas-city").at(kansas_city()),
        Stop::new("new-york").at(new_york()).on(day(20)).fixed(),
    ])
}

/// Four Bay Area shows on consecutive nights.
#[must_use]
pub fn bay_area_route() -> Route {
    route(vec![
        Stop::new("san-francisco").at(san_francisco()).on(day(0)),
        Stop::new("oakland").at(oakland()).on(day(1)),
        Stop::new("san-jose").at(san_jose()).on(day(2)),
        Stop::new("sacramento").at(sacramento()).on(day(3)),
    ])
}
