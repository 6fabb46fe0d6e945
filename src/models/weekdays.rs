//! Weekday filter for work schedules.
//!
//! A [`Weekdays`] set is written in ledger input as a comma separated list of
//! two-letter codes, e.g. `byweekday=MO,WE,FR`.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

bitflags! {
    /// A set of weekdays a schedule applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Weekdays: u8 {
        /// Monday.
        const MONDAY = 1 << 0;
        /// Tuesday.
        const TUESDAY = 1 << 1;
        /// Wednesday.
        const WEDNESDAY = 1 << 2;
        /// Thursday.
        const THURSDAY = 1 << 3;
        /// Friday.
        const FRIDAY = 1 << 4;
        /// Saturday.
        const SATURDAY = 1 << 5;
        /// Sunday.
        const SUNDAY = 1 << 6;

        /// Monday through Friday.
        const WORKWEEK = Self::MONDAY.bits()
            | Self::TUESDAY.bits()
            | Self::WEDNESDAY.bits()
            | Self::THURSDAY.bits()
            | Self::FRIDAY.bits();
    }
}

const CODES: [(&str, Weekdays); 7] = [
    ("MO", Weekdays::MONDAY),
    ("TU", Weekdays::TUESDAY),
    ("WE", Weekdays::WEDNESDAY),
    ("TH", Weekdays::THURSDAY),
    ("FR", Weekdays::FRIDAY),
    ("SA", Weekdays::SATURDAY),
    ("SU", Weekdays::SUNDAY),
];

impl Weekdays {
    /// The single-day set for a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Weekdays::MONDAY,
            Weekday::Tue => Weekdays::TUESDAY,
            Weekday::Wed => Weekdays::WEDNESDAY,
            Weekday::Thu => Weekdays::THURSDAY,
            Weekday::Fri => Weekdays::FRIDAY,
            Weekday::Sat => Weekdays::SATURDAY,
            Weekday::Sun => Weekdays::SUNDAY,
        }
    }

    /// Checks whether the set includes `weekday`.
    ///
    /// # Example
    ///
    /// ```
    /// use arbeitszeit::models::Weekdays;
    /// use chrono::Weekday;
    ///
    /// let days: Weekdays = "MO,WE".parse().unwrap();
    /// assert!(days.includes(Weekday::Wed));
    /// assert!(!days.includes(Weekday::Tue));
    /// ```
    pub fn includes(self, weekday: Weekday) -> bool {
        self.contains(Self::from_weekday(weekday))
    }
}

impl Default for Weekdays {
    fn default() -> Self {
        Weekdays::WORKWEEK
    }
}

impl FromStr for Weekdays {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut days = Weekdays::empty();
        for token in s.split(',') {
            let code = token.trim().to_ascii_uppercase();
            let day = CODES
                .iter()
                .find(|(name, _)| *name == code)
                .map(|(_, day)| *day)
                .ok_or_else(|| EngineError::UnknownWeekday {
                    token: token.to_string(),
                })?;
            days |= day;
        }
        Ok(days)
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = CODES
            .iter()
            .filter(|(_, day)| self.contains(*day))
            .map(|(name, _)| *name)
            .collect();
        write!(f, "{}", codes.join(","))
    }
}

impl Serialize for Weekdays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Weekdays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
