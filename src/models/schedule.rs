//! Work schedule model.

use chrono::Duration;

use crate::recurrence::DayRange;

use super::{Interval, Weekdays};

/// A nominal weekly obligation: `amount` on every matching weekday within
/// `validity`.
///
/// Created once per `schedule` command and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    /// Time owed on each matching day.
    pub amount: Duration,
    /// The span during which the schedule applies.
    pub validity: Interval,
    /// The weekdays the schedule applies to.
    pub weekdays: Weekdays,
}

impl WorkSchedule {
    /// The calendar days covered by the validity interval.
    pub fn day_range(&self) -> DayRange {
        DayRange::new(self.validity.first_day(), self.validity.last_day())
    }
}
