//! Interval model.
//!
//! An [`Interval`] is a closed span between two date-times. It backs schedule
//! validity spans, vacations and single work entries.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A closed span of time with `start <= end`.
///
/// The invariant is established by the literal parser, which rejects
/// intervals ending before they start.
///
/// # Example
///
/// ```
/// use arbeitszeit::models::Interval;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let interval = Interval {
///     start: NaiveDateTime::parse_from_str("2024-01-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2024-01-05 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// assert!(interval.contains_day(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
/// assert!(interval.contains_day(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()));
/// assert!(!interval.contains_day(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// The start of the interval (inclusive).
    pub start: NaiveDateTime,
    /// The end of the interval (inclusive).
    pub end: NaiveDateTime,
}

impl Interval {
    /// Calendar day of the start.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Calendar day of the end.
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Checks whether a calendar day overlaps the interval.
    ///
    /// Both endpoints are compared by calendar date, so a vacation ending at
    /// midnight still covers its last day.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.first_day() && day <= self.last_day()
    }

    /// Elapsed time between start and end.
    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}
