#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! End-to-end scoring of a hand-built tour.

use chrono::NaiveDate;
use routescore_core::{Coordinate, Route, Stop, TravelTimeConfig, total_distance};
use routescore_scorer::{RouteEvaluator, ScoreWeights, score_route};
use rstest::{fixture, rstest};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid calendar date")
}

fn stop(id: &str, lat: f64, lon: f64, on: Option<NaiveDate>) -> Stop {
    let location = Coordinate::new(lat, lon).expect("valid coordinate");
    let located = Stop::new(id).at(location);
    match on {
        Some(day) => located.on(day),
        None => located,
    }
}

/// A Pacific coast run with one gap in the calendar.
#[fixture]
fn west_coast() -> Route {
    Route::new(vec![
        stop("san-diego", 32.7157, -117.1611, Some(date(7, 1))),
        stop("los-angeles", 34.0522, -118.2437, Some(date(7, 2))),
        stop("san-francisco", 37.7749, -122.4194, None),
        stop("portland", 45.5152, -122.6784, Some(date(7, 8))),
        stop("seattle", 47.6062, -122.3321, Some(date(7, 9))),
    ])
    .expect("unique stop ids")
}

#[rstest]
fn score_route_matches_the_evaluator(west_coast: Route) {
    let evaluation = RouteEvaluator::default().evaluate(&west_coast);
    assert_eq!(score_route(&west_coast), evaluation.score);
    let km = evaluation.metrics.total_distance_km;
    assert!((km - total_distance(&west_coast)).abs() < 1e-9);
    assert_eq!(evaluation.signals.date_coverage, 80);
}

#[rstest]
fn dropping_the_undated_stop_keeps_scores_in_range(west_coast: Route) {
    let trimmed = Route::new(
        west_coast
            .stops()
            .iter()
            .filter(|s| s.date().is_some())
            .cloned()
            .collect(),
    )
    .expect("unique stop ids");
    let evaluation = RouteEvaluator::default().evaluate(&trimmed);
    assert_eq!(evaluation.signals.date_coverage, 100);
    assert!(evaluation.score <= 100);
}

#[rstest]
#[case(100.0, 1.0)]
#[case(50.0, 1.5)]
fn travel_assumptions_flow_through(west_coast: Route, #[case] speed: f64, #[case] buffer: f64) {
    let config = TravelTimeConfig::new(speed, buffer).expect("valid travel config");
    let evaluator = RouteEvaluator::new(config, ScoreWeights::default()).expect("default weights");
    let evaluation = evaluator.evaluate(&west_coast);
    let expected = total_distance(&west_coast) / speed * 60.0 * buffer;
    // Per-segment rounding drifts by at most half a minute per segment.
    let minutes = f64::from(evaluation.metrics.total_travel_time_minutes);
    assert!((minutes - expected).abs() <= 2.0);
}
