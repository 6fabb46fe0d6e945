//! Bounded calendar-day ranges and their day iterator.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// Iterating is lazy and restartable: [`DayRange::days`] can be called any
/// number of times and always yields the same chronological sequence.
///
/// # Example
///
/// ```
/// use arbeitszeit::recurrence::DayRange;
/// use chrono::NaiveDate;
///
/// let range = DayRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// );
/// let days: Vec<String> = range.days().map(|d| d.to_string()).collect();
/// assert_eq!(days, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    first: NaiveDate,
    last: NaiveDate,
}

impl DayRange {
    /// Creates the range between two days, in whichever order they are given.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// First day (inclusive).
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Last day (inclusive).
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Checks whether `day` lies within the range.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.first && day <= self.last
    }

    /// Smallest range covering both ranges.
    pub fn union(&self, other: &DayRange) -> DayRange {
        DayRange {
            first: self.first.min(other.first),
            last: self.last.max(other.last),
        }
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        // `last >= first` always holds, so the difference is non-negative
        (self.last - self.first).num_days() as usize + 1
    }

    /// Always `false`: a range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// A fresh iterator over every day in the range.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.first),
            last: self.last,
        }
    }
}

impl IntoIterator for DayRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DayRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.last {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => (self.last - next).num_days() as usize + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
