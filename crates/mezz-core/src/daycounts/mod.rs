//! Day count conventions.
//!
//! The valuation schedule works exclusively in ACT/365F: the year fraction
//! between two dates is the actual calendar-day difference divided by a
//! fixed 365-day basis. No holiday calendar is applied.

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to a specific market convention. Year fractions are `f64`
/// because they feed directly into the transcendental functions of the
/// lattice (`exp`, `sqrt`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
