//! Criterion benchmarks for route evaluation.
//!
//! Measures full evaluation (distance, travel time, signals and composite
//! score) across tour lengths of 10, 100 and 1000 stops.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package routescore-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use routescore_core::{Coordinate, Route, Stop};
use routescore_scorer::{OptimizationScoreInput, RouteEvaluator, ScoreWeights, optimization_score};

/// Tour lengths to benchmark.
const TOUR_SIZES: &[usize] = &[10, 100, 1000];

/// Build a deterministic tour zig-zagging across the continental US, with
/// every third stop undated.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "benchmark fixtures walk a coordinate grid"
)]
fn build_tour(size: usize) -> Route {
    let opening = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let stops = (0..size)
        .map(|index| {
            let step = (index % 50) as f64;
            let lat = 30.0 + step * 0.3;
            let lon = -120.0 + (index % 97) as f64 * 0.5;
            let mut stop = Stop::new(format!("stop-{index}"));
            if let Ok(location) = Coordinate::new(lat, lon) {
                stop = stop.at(location);
            }
            if index % 3 != 0 {
                let offset = u64::try_from(index).unwrap_or_default();
                let shifted = opening.checked_add_days(Days::new(offset));
                stop = stop.on(shifted.unwrap_or(opening));
            }
            stop
        })
        .collect();
    Route::new(stops).unwrap_or_default()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = RouteEvaluator::default();

    for &size in TOUR_SIZES {
        let route = build_tour(size);
        let elements = u64::try_from(size).unwrap_or_default();
        group.throughput(Throughput::Elements(elements));
        group.bench_with_input(BenchmarkId::from_parameter(size), &route, |b, tour| {
            b.iter(|| evaluator.evaluate(black_box(tour)));
        });
    }

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let weights = ScoreWeights::default();
    let Ok(input) = OptimizationScoreInput::new(3939.4, 4363, 0, 0, 67) else {
        return;
    };
    c.bench_function("optimization_score", |b| {
        b.iter(|| optimization_score(black_box(&input), &weights));
    });
}

criterion_group!(benches, bench_evaluate, bench_composite);
criterion_main!(benches);
