//! Configuration types for the working-time ledger.
//!
//! This module contains the strongly-typed settings deserialized from a YAML
//! configuration file.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Weekdays;

/// How the report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `SOLL/IST/AKT` line per day plus totals.
    #[default]
    Text,
    /// The report as a JSON document.
    Json,
}

/// Interpreter defaults and output settings.
///
/// Every field is optional in the file; missing fields take the values of
/// [`Settings::default`].
///
/// # Example
///
/// ```
/// use arbeitszeit::config::{OutputFormat, Settings};
/// use arbeitszeit::models::Weekdays;
///
/// let settings: Settings = serde_yaml::from_str("default_weekdays: MO,TU,WE,TH").unwrap();
/// assert!(!settings.default_weekdays.contains(Weekdays::FRIDAY));
/// assert_eq!(settings.format, OutputFormat::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Weekdays used by `schedule` when `byweekday` is omitted.
    pub default_weekdays: Weekdays,
    /// Date used by `holiday` when no date is given.
    pub holiday_anchor: NaiveDate,
    /// Report format.
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_weekdays: Weekdays::WORKWEEK,
            holiday_anchor: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default(),
            format: OutputFormat::Text,
        }
    }
}
