//! Holiday rule model.
//!
//! Holidays are yearly rules rather than single dates. A rule is evaluated
//! directly for the year being asked about, so it answers for any year,
//! including years before the date it was declared with.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::recurrence::easter_sunday;

/// A yearly recurring holiday.
///
/// # Example
///
/// ```
/// use arbeitszeit::models::HolidayRule;
/// use chrono::NaiveDate;
///
/// let easter_monday = HolidayRule::EasterRelative { offset_days: 1 };
/// assert_eq!(
///     easter_monday.date_in_year(2024),
///     NaiveDate::from_ymd_opt(2024, 4, 1)
/// );
/// assert!(easter_monday.matches(NaiveDate::from_ymd_opt(1999, 4, 5).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HolidayRule {
    /// The month and day of `anchor`, every year.
    Fixed {
        /// The declared date; only its month and day matter.
        anchor: NaiveDate,
    },
    /// A signed number of days after Easter Sunday, every year.
    EasterRelative {
        /// Days relative to Easter Sunday (`-2` is Good Friday).
        offset_days: i64,
    },
}

impl HolidayRule {
    /// The date this rule falls on in `year`, if any.
    ///
    /// A fixed rule anchored on February 29th has no date in common years.
    /// An Easter-relative rule whose offset leaves the year has no date
    /// either.
    pub fn date_in_year(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::Fixed { anchor } => {
                NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day())
            }
            HolidayRule::EasterRelative { offset_days } => {
                let date = easter_sunday(year)?
                    .checked_add_signed(TimeDelta::try_days(offset_days)?)?;
                (date.year() == year).then_some(date)
            }
        }
    }

    /// Checks whether `day` is an occurrence of this rule.
    pub fn matches(&self, day: NaiveDate) -> bool {
        self.date_in_year(day.year()) == Some(day)
    }
}
