//! Score a route on a single quality signal.
//!
//! The `RouteSignal` trait assigns a 0-100 score to a [`Route`] for one
//! aspect of its quality, such as geographic clustering or date spacing.

use crate::Route;

/// Calculate a 0-100 score for one aspect of a route.
///
/// Higher scores are better. Implementations must be thread-safe
/// (`Send` + `Sync`) so candidate routes can be scored in parallel.
/// The method is infallible; incomplete data lowers the information
/// available but must never cause a panic.
///
/// Use [`RouteSignal::sanitise`] to turn a raw percentage into a valid score.
///
/// # Examples
///
/// ```rust
/// use routescore_core::{Route, RouteSignal};
///
/// struct LengthSignal;
///
/// impl RouteSignal for LengthSignal {
///     fn name(&self) -> &'static str {
///         "length"
///     }
///
///     fn score(&self, route: &Route) -> u8 {
///         Self::sanitise(route.len() as f64 * 10.0)
///     }
/// }
///
/// assert_eq!(LengthSignal.score(&Route::empty()), 0);
/// ```
pub trait RouteSignal: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Return a score in `0..=100` for `route`.
    fn score(&self, route: &Route) -> u8;

    /// Round and clamp a raw percentage.
    ///
    /// Returns `0` for non-finite values and clamps to `0..=100`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped into 0..=100 before the cast"
    )]
    #[must_use]
    fn sanitise(raw: f64) -> u8
    where
        Self: Sized,
    {
        if !raw.is_finite() {
            return 0;
        }
        raw.clamp(0.0, 100.0).round() as u8
    }
}
