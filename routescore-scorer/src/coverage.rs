//! Date coverage: the share of stops that already have a date.

use routescore_core::{Route, RouteSignal};

use crate::percentage;

/// Percentage of stops carrying a date; an empty route scores 0.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use routescore_core::{Route, RouteSignal, Stop};
/// use routescore_scorer::DateCoverageSignal;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2025, 5, 1).ok_or("date")?;
/// let route = Route::new(vec![Stop::new("a").on(date), Stop::new("b")])?;
/// assert_eq!(DateCoverageSignal.score(&route), 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DateCoverageSignal;

impl RouteSignal for DateCoverageSignal {
    fn name(&self) -> &'static str {
        "date_coverage"
    }

    fn score(&self, route: &Route) -> u8 {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        let dated = count(route.dated_stops().count());
        Self::sanitise(percentage(dated, count(route.len())))
    }
}

/// Date coverage score of `route`, in `0..=100`.
#[must_use]
pub fn date_coverage_score(route: &Route) -> u8 {
    DateCoverageSignal.score(route)
}
