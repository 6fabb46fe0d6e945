//! Logged work entries.

use chrono::{Duration, NaiveDate};

use super::Interval;

/// One logged shift: clock-in, clock-out and an unpaid lunch break.
///
/// The lunch break is not checked against the shift length, so an entry can
/// contribute negative worked time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkEntry {
    /// Clock-in and clock-out.
    pub span: Interval,
    /// Unpaid break taken during the shift.
    pub lunch: Duration,
}

impl WorkEntry {
    /// Worked time: shift length minus lunch.
    ///
    /// # Example
    ///
    /// ```
    /// use arbeitszeit::models::{Interval, WorkEntry};
    /// use chrono::{Duration, NaiveDateTime};
    ///
    /// let entry = WorkEntry {
    ///     span: Interval {
    ///         start: NaiveDateTime::parse_from_str("2024-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///         end: NaiveDateTime::parse_from_str("2024-01-01 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     },
    ///     lunch: Duration::minutes(30),
    /// };
    /// assert_eq!(entry.worked(), Duration::hours(8));
    /// ```
    pub fn worked(&self) -> Duration {
        self.span.length() - self.lunch
    }

    /// The calendar day the entry is booked on (the day of clock-in).
    pub fn day(&self) -> NaiveDate {
        self.span.first_day()
    }
}
