//! Recurrence rules over calendar days.
//!
//! Weekly schedules are expanded lazily over their bounded validity span;
//! holiday rules and vacations are answered as point queries for a single
//! day.

mod day_range;
mod easter;
mod weekly;

use chrono::NaiveDate;

use crate::models::{HolidayRule, Interval};

pub use day_range::{DayRange, Days};
pub use easter::easter_sunday;
pub use weekly::{Occurrences, expand_weekly_schedule};

/// Checks whether any holiday rule falls on `day`.
///
/// # Example
///
/// ```
/// use arbeitszeit::models::HolidayRule;
/// use arbeitszeit::recurrence::is_holiday;
/// use chrono::NaiveDate;
///
/// let rules = [HolidayRule::EasterRelative { offset_days: 1 }];
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2019, 4, 22).unwrap(), &rules));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2019, 4, 23).unwrap(), &rules));
/// ```
pub fn is_holiday(day: NaiveDate, rules: &[HolidayRule]) -> bool {
    rules.iter().any(|rule| rule.matches(day))
}

/// Checks whether `day` lies within any vacation, endpoints inclusive.
pub fn is_vacation(day: NaiveDate, vacations: &[Interval]) -> bool {
    vacations.iter().any(|vacation| vacation.contains_day(day))
}
