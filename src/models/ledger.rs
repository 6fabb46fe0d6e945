//! Ledger report models.
//!
//! This module contains the [`Report`] produced by the accounting pass and its
//! text rendering. All quantities are whole minutes; negative values are
//! deficits.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One calendar day of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerLine {
    /// The calendar day.
    pub date: NaiveDate,
    /// Scheduled time for the day (SOLL).
    pub scheduled_minutes: i64,
    /// Worked time for the day (IST).
    pub worked_minutes: i64,
    /// Running balance after the day (AKT).
    pub balance_minutes: i64,
}

/// Grand totals over the whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerTotals {
    /// All scheduled time.
    pub scheduled_minutes: i64,
    /// All worked time, including time outside any schedule.
    pub worked_minutes: i64,
    /// Final balance.
    pub balance_minutes: i64,
}

/// The full day-by-day report.
///
/// `Display` renders the plain-text report:
///
/// ```text
/// 2024-01-01: SOLL 08:00 IST 08:00 AKT 00:00
/// 2024-01-02: SOLL 08:00 IST 00:00 AKT -08:00
/// TOTAL: SOLL 16:00 IST 08:00 AKT -08:00
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One line per day of the schedules' day range, in order.
    pub days: Vec<LedgerLine>,
    /// Worked time booked outside every schedule, when positive.
    pub out_of_schedule_minutes: Option<i64>,
    /// Grand totals.
    pub totals: LedgerTotals,
}

/// Whole minutes of a duration, rounded towards negative infinity.
pub fn floor_minutes(duration: Duration) -> i64 {
    duration.num_seconds().div_euclid(60)
}

/// Renders minutes as `HH:MM`, with a leading `-` when negative.
///
/// Hours are not wrapped at 24 and are padded to at least two digits.
///
/// # Example
///
/// ```
/// use arbeitszeit::models::format_minutes;
///
/// assert_eq!(format_minutes(90), "01:30");
/// assert_eq!(format_minutes(-480), "-08:00");
/// assert_eq!(format_minutes(6000), "100:00");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

impl fmt::Display for LedgerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: SOLL {} IST {} AKT {}",
            self.date.format("%Y-%m-%d"),
            format_minutes(self.scheduled_minutes),
            format_minutes(self.worked_minutes),
            format_minutes(self.balance_minutes)
        )
    }
}

impl fmt::Display for LedgerTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TOTAL: SOLL {} IST {} AKT {}",
            format_minutes(self.scheduled_minutes),
            format_minutes(self.worked_minutes),
            format_minutes(self.balance_minutes)
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.days {
            writeln!(f, "{line}")?;
        }
        if let Some(minutes) = self.out_of_schedule_minutes {
            writeln!(f, "OUT OF SCHEDULE TIME: {}", format_minutes(minutes))?;
        }
        writeln!(f, "{}", self.totals)
    }
}
