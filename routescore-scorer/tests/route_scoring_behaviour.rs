#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for route evaluation and candidate comparison.

use std::cell::RefCell;

use routescore_core::test_support::{
    bay_area_route, los_angeles, new_york, route, transcontinental_route,
};
use routescore_core::{FixedStopViolation, Route, Stop, StopId};
use routescore_scorer::{ComparisonError, RouteComparison, RouteEvaluation, RouteEvaluator};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type Comparison = RefCell<Option<Result<RouteComparison, ComparisonError>>>;

#[fixture]
fn current() -> RefCell<Option<Route>> {
    RefCell::new(None)
}

#[fixture]
fn candidate() -> RefCell<Option<Route>> {
    RefCell::new(None)
}

#[fixture]
fn evaluation() -> RefCell<Option<RouteEvaluation>> {
    RefCell::new(None)
}

#[fixture]
fn comparison() -> Comparison {
    RefCell::new(None)
}

fn evaluated(evaluation: &RefCell<Option<RouteEvaluation>>) -> RouteEvaluation {
    evaluation.borrow().expect("route was evaluated")
}

fn compared(comparison: &Comparison) -> RouteComparison {
    comparison
        .borrow()
        .clone()
        .expect("routes were compared")
        .expect("comparison succeeded")
}

fn tour_stops(ids: &[&str]) -> Vec<Stop> {
    let tour = transcontinental_route();
    ids.iter()
        .map(|id| {
            tour.position_of(&StopId::from(*id))
                .and_then(|index| tour.get(index))
                .cloned()
                .expect("stop is part of the tour")
        })
        .collect()
}

#[given("the transcontinental tour")]
fn given_transcontinental(#[from(current)] current: &RefCell<Option<Route>>) {
    *current.borrow_mut() = Some(transcontinental_route());
}

#[given("the Bay Area tour")]
fn given_bay_area(#[from(current)] current: &RefCell<Option<Route>>) {
    *current.borrow_mut() = Some(bay_area_route());
}

#[given("a candidate identical to the current route")]
fn given_identical(
    #[from(current)] current: &RefCell<Option<Route>>,
    #[from(candidate)] candidate: &RefCell<Option<Route>>,
) {
    *candidate.borrow_mut() = current.borrow().clone();
}

#[given("a candidate visiting New York before Kansas City")]
fn given_backtracking(#[from(candidate)] candidate: &RefCell<Option<Route>>) {
    *candidate.borrow_mut() = Some(route(tour_stops(&[
        "los-angeles",
        "new-york",
        "kansas-city",
    ])));
}

#[given("a candidate starting in Kansas City")]
fn given_kansas_city_first(#[from(candidate)] candidate: &RefCell<Option<Route>>) {
    *candidate.borrow_mut() = Some(route(tour_stops(&[
        "kansas-city",
        "los-angeles",
        "new-york",
    ])));
}

#[given("a candidate that drops Kansas City")]
fn given_dropped(#[from(candidate)] candidate: &RefCell<Option<Route>>) {
    *candidate.borrow_mut() = Some(route(vec![
        Stop::new("los-angeles").at(los_angeles()),
        Stop::new("new-york").at(new_york()),
    ]));
}

#[when("I evaluate the route")]
fn when_evaluate(
    #[from(current)] current: &RefCell<Option<Route>>,
    #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>,
) {
    let borrow = current.borrow();
    let route = borrow.as_ref().expect("a route was given");
    *evaluation.borrow_mut() = Some(RouteEvaluator::default().evaluate(route));
}

#[when("I compare the candidate with the current route")]
fn when_compare(
    #[from(current)] current: &RefCell<Option<Route>>,
    #[from(candidate)] candidate: &RefCell<Option<Route>>,
    #[from(comparison)] comparison: &Comparison,
) {
    let current_borrow = current.borrow();
    let candidate_borrow = candidate.borrow();
    let result = RouteEvaluator::default().compare(
        current_borrow.as_ref().expect("a current route was given"),
        candidate_borrow.as_ref().expect("a candidate was given"),
    );
    *comparison.borrow_mut() = Some(result);
}

#[then("the total distance is about {km} km")]
fn then_distance(km: f64, #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    let total = evaluated(evaluation).metrics.total_distance_km;
    assert!(
        (total - km).abs() <= 1.0,
        "expected about {km}, got {total}"
    );
}

#[then("the clustering score is {score}")]
fn then_clustering(score: u8, #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    assert_eq!(evaluated(evaluation).signals.clustering, score);
}

#[then("the schedule efficiency score is {score}")]
fn then_schedule(score: u8, #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    assert_eq!(evaluated(evaluation).signals.schedule_efficiency, score);
}

#[then("the date coverage score is {score}")]
fn then_coverage(score: u8, #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    assert_eq!(evaluated(evaluation).signals.date_coverage, score);
}

#[then("the distance penalty is at its cap")]
fn then_capped(#[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    let breakdown = evaluated(evaluation).breakdown;
    assert!((breakdown.distance_penalty - 20.0).abs() < f64::EPSILON);
}

#[then("the optimization score is {score}")]
fn then_score(score: u8, #[from(evaluation)] evaluation: &RefCell<Option<RouteEvaluation>>) {
    assert_eq!(evaluated(evaluation).score, score);
}

#[then("the score delta is {delta}")]
fn then_delta(delta: i16, #[from(comparison)] comparison: &Comparison) {
    assert_eq!(compared(comparison).score_delta(), delta);
}

#[then("the current route scores higher")]
fn then_current_better(#[from(comparison)] comparison: &Comparison) {
    let result = compared(comparison);
    assert!(
        result.score_delta() < 0,
        "delta was {}",
        result.score_delta()
    );
    assert!(result.distance_saved_km() < 0.0);
}

#[then("no fixed stop is disturbed")]
fn then_undisturbed(#[from(comparison)] comparison: &Comparison) {
    assert!(compared(comparison).respects_fixed_stops());
}

#[then("the fixed stop {id} is reported as moved")]
fn then_moved(id: String, #[from(comparison)] comparison: &Comparison) {
    let violations = compared(comparison).fixed_stop_violations;
    let expected = StopId::from(id);
    assert!(
        violations.iter().any(|violation| matches!(
            violation,
            FixedStopViolation::Moved { id: moved, .. } if *moved == expected
        )),
        "no move reported for {expected} in {violations:?}"
    );
}

#[then("the comparison is rejected")]
fn then_rejected(#[from(comparison)] comparison: &Comparison) {
    let borrow = comparison.borrow();
    let result = borrow.as_ref().expect("routes were compared");
    assert_eq!(
        result,
        &Err(ComparisonError::StopSetMismatch {
            missing_from_candidate: vec![StopId::from("kansas-city")],
            unexpected_in_candidate: Vec::new(),
        })
    );
}

#[scenario(path = "tests/features/route_scoring.feature", index = 0)]
fn transcontinental_tour(
    current: RefCell<Option<Route>>,
    evaluation: RefCell<Option<RouteEvaluation>>,
) {
    let _ = (current, evaluation);
}

#[scenario(path = "tests/features/route_scoring.feature", index = 1)]
fn clustered_tour(current: RefCell<Option<Route>>, evaluation: RefCell<Option<RouteEvaluation>>) {
    let _ = (current, evaluation);
}

#[scenario(path = "tests/features/route_scoring.feature", index = 2)]
fn unchanged_candidate(
    current: RefCell<Option<Route>>,
    candidate: RefCell<Option<Route>>,
    comparison: Comparison,
) {
    let _ = (current, candidate, comparison);
}

#[scenario(path = "tests/features/route_scoring.feature", index = 3)]
fn backtracking_candidate(
    current: RefCell<Option<Route>>,
    candidate: RefCell<Option<Route>>,
    comparison: Comparison,
) {
    let _ = (current, candidate, comparison);
}

#[scenario(path = "tests/features/route_scoring.feature", index = 4)]
fn moved_fixed_stop(
    current: RefCell<Option<Route>>,
    candidate: RefCell<Option<Route>>,
    comparison: Comparison,
) {
    let _ = (current, candidate, comparison);
}

#[scenario(path = "tests/features/route_scoring.feature", index = 5)]
fn different_stop_sets(
    current: RefCell<Option<Route>>,
    candidate: RefCell<Option<Route>>,
    comparison: Comparison,
) {
    let _ = (current, candidate, comparison);
}
