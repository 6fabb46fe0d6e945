//! Expansion of weekly schedules into dated obligations.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Weekdays, WorkSchedule};

use super::day_range::Days;

/// Lazy sequence of `(day, amount)` obligations of one schedule.
#[derive(Debug, Clone)]
pub struct Occurrences {
    days: Days,
    weekdays: Weekdays,
    amount: Duration,
}

impl Iterator for Occurrences {
    type Item = (NaiveDate, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        let weekdays = self.weekdays;
        self.days
            .find(|day| weekdays.includes(day.weekday()))
            .map(|day| (day, self.amount))
    }
}

/// Expands a schedule into every matching day of its validity span.
///
/// Days are yielded chronologically; validity bounds are compared by
/// calendar date, so both the first and the last day take part.
///
/// # Example
///
/// ```
/// use arbeitszeit::models::{Interval, Weekdays, WorkSchedule};
/// use arbeitszeit::recurrence::expand_weekly_schedule;
/// use chrono::{Duration, NaiveDateTime};
///
/// let schedule = WorkSchedule {
///     amount: Duration::hours(8),
///     validity: Interval {
///         start: NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///         end: NaiveDateTime::parse_from_str("2024-01-07 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     },
///     weekdays: Weekdays::WORKWEEK,
/// };
///
/// assert_eq!(expand_weekly_schedule(&schedule).count(), 5);
/// ```
pub fn expand_weekly_schedule(schedule: &WorkSchedule) -> Occurrences {
    Occurrences {
        days: schedule.day_range().days(),
        weekdays: schedule.weekdays,
        amount: schedule.amount,
    }
}
