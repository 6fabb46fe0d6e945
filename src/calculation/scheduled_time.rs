//! Scheduled (SOLL) time per day.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::models::FactStore;
use crate::recurrence::{DayRange, expand_weekly_schedule};

use super::accumulate;

/// Scheduled time bucketed by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTimeResult {
    /// Scheduled time for every day of the range, zero where nothing is owed.
    pub per_day: BTreeMap<NaiveDate, Duration>,
    /// Sum of all buckets.
    pub total: Duration,
    /// Schedule occurrences dropped because of a holiday or vacation.
    pub days_off: usize,
}

/// Expands every schedule and sums the obligations per day.
///
/// Occurrences on a holiday or inside a vacation are dropped. Overlapping
/// schedules add up.
///
/// # Arguments
///
/// * `facts` - The interpreted input
/// * `range` - The day range covered by the schedules
///
/// # Errors
///
/// [`crate::error::EngineError::TimeOverflow`] when a sum leaves the representable range.
pub fn calculate_scheduled_time(
    facts: &FactStore,
    range: &DayRange,
) -> EngineResult<ScheduledTimeResult> {
    let mut per_day: BTreeMap<NaiveDate, Duration> =
        range.days().map(|day| (day, Duration::zero())).collect();
    let mut total = Duration::zero();
    let mut days_off = 0;

    for schedule in facts.schedules() {
        for (day, amount) in expand_weekly_schedule(schedule) {
            if facts.is_day_off(day) {
                days_off += 1;
                continue;
            }
            accumulate(
                per_day.entry(day).or_insert_with(Duration::zero),
                amount,
                "scheduled",
            )?;
            accumulate(&mut total, amount, "scheduled")?;
        }
    }

    Ok(ScheduledTimeResult {
        per_day,
        total,
        days_off,
    })
}
