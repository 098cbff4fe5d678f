//! Geographic clustering: reward routes whose neighbouring stops are close.

use routescore_core::{Route, RouteSignal, haversine_km};

use crate::percentage;

/// Score returned when a route has too few stops to judge clustering.
pub const NEUTRAL_CLUSTERING_SCORE: u8 = 50;

/// Points available per interior stop.
const MAX_POINTS_PER_STOP: u32 = 10;

/// Upper distance bound (exclusive, km) and the points it earns.
const CLUSTER_BANDS: [(f64, u32); 5] = [(50.0, 10), (100.0, 8), (200.0, 6), (300.0, 4), (500.0, 2)];

/// Points for an interior stop whose farther neighbour is `km` away.
fn band_points(km: f64) -> u32 {
    CLUSTER_BANDS
        .iter()
        .find(|&&(limit, _)| km < limit)
        .map_or(0, |&(_, points)| points)
}

/// Rewards routes where each interior stop is close to both neighbours.
///
/// Each interior stop (neither first nor last) earns points for the larger
/// of its distances to the previous and next stop: under 50 km earns 10,
/// under 100 km 8, under 200 km 6, under 300 km 4, under 500 km 2, anything
/// farther 0. An interior stop where any of the three locations is missing
/// earns nothing but still counts toward the maximum. Routes with fewer than
/// three stops score [`NEUTRAL_CLUSTERING_SCORE`].
///
/// # Examples
/// ```
/// use routescore_core::{Route, RouteSignal, Stop};
/// use routescore_scorer::ClusteringSignal;
///
/// let route = Route::new(vec![Stop::new("a"), Stop::new("b")])?;
/// assert_eq!(ClusteringSignal.score(&route), 50);
/// # Ok::<(), routescore_core::RouteError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusteringSignal;

impl RouteSignal for ClusteringSignal {
    fn name(&self) -> &'static str {
        "clustering"
    }

    fn score(&self, route: &Route) -> u8 {
        if route.len() < 3 {
            return NEUTRAL_CLUSTERING_SCORE;
        }

        let mut awarded = 0_u32;
        let mut interior = 0_u32;
        for window in route.stops().windows(3) {
            let [previous, stop, next] = window else {
                continue;
            };
            interior = interior.saturating_add(1);
            if let (Some(before), Some(here), Some(after)) =
                (previous.location(), stop.location(), next.location())
            {
                let farther = haversine_km(here, before).max(haversine_km(here, after));
                awarded = awarded.saturating_add(band_points(farther));
            }
        }

        Self::sanitise(percentage(
            awarded,
            interior.saturating_mul(MAX_POINTS_PER_STOP),
        ))
    }
}

/// Geographic clustering score of `route`, in `0..=100`.
#[must_use]
pub fn clustering_score(route: &Route) -> u8 {
    ClusteringSignal.score(route)
}
