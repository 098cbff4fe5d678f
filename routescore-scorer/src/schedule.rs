//! Schedule efficiency: reward tight spacing between dated stops.

use chrono::NaiveDate;
use routescore_core::{Route, RouteSignal};

use crate::percentage;

/// Score returned when fewer than two stops carry a date.
pub const INSUFFICIENT_SCHEDULE_SCORE: u8 = 40;

/// Points available per gap between consecutive dated stops.
const MAX_POINTS_PER_GAP: u32 = 10;

/// Points earned by a gap of `days` between consecutive show dates.
const fn gap_points(days: i64) -> u32 {
    match days {
        1 => 10,
        2 => 9,
        3 => 7,
        ..=5 => 5,
        6..=7 => 3,
        8..=14 => 1,
        _ => 0,
    }
}

/// Rewards itineraries with little idle time between dated stops.
///
/// Dated stops are sorted by date first; route order is not trusted to be
/// chronological. Each gap between consecutive dates earns points: 1 day 10,
/// 2 days 9, 3 days 7, up to 5 days 5, up to a week 3, up to two weeks 1,
/// longer 0. Routes with fewer than two dated stops score
/// [`INSUFFICIENT_SCHEDULE_SCORE`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use routescore_core::{Route, RouteSignal, Stop};
/// use routescore_scorer::ScheduleEfficiencySignal;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let first = NaiveDate::from_ymd_opt(2025, 5, 1).ok_or("date")?;
/// let second = NaiveDate::from_ymd_opt(2025, 5, 2).ok_or("date")?;
/// let route = Route::new(vec![Stop::new("a").on(second), Stop::new("b").on(first)])?;
/// assert_eq!(ScheduleEfficiencySignal.score(&route), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleEfficiencySignal;

impl RouteSignal for ScheduleEfficiencySignal {
    fn name(&self) -> &'static str {
        "schedule_efficiency"
    }

    fn score(&self, route: &Route) -> u8 {
        let mut dates: Vec<NaiveDate> = route.stops().iter().filter_map(|s| s.date()).collect();
        if dates.len() < 2 {
            return INSUFFICIENT_SCHEDULE_SCORE;
        }
        dates.sort_unstable();

        let mut awarded = 0_u32;
        let mut gaps = 0_u32;
        for pair in dates.windows(2) {
            let [earlier, later] = pair else {
                continue;
            };
            gaps = gaps.saturating_add(1);
            let days = later.signed_duration_since(*earlier).num_days();
            awarded = awarded.saturating_add(gap_points(days));
        }

        Self::sanitise(percentage(awarded, gaps.saturating_mul(MAX_POINTS_PER_GAP)))
    }
}

/// Schedule efficiency score of `route`, in `0..=100`.
#[must_use]
pub fn schedule_efficiency_score(route: &Route) -> u8 {
    ScheduleEfficiencySignal.score(route)
}
