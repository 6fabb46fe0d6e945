//! Worked (IST) time per day.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::models::FactStore;
use crate::recurrence::DayRange;

use super::accumulate;

/// Worked time bucketed by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkedTimeResult {
    /// Worked time for every day of the range.
    pub per_day: BTreeMap<NaiveDate, Duration>,
    /// Worked time of entries starting outside the range.
    pub out_of_schedule: Duration,
    /// All worked time, in range or not.
    pub total: Duration,
}

/// Books every work entry on the day it starts.
///
/// Entries whose start day lies outside `range` go to
/// [`WorkedTimeResult::out_of_schedule`] instead of a day bucket. Either way
/// they count towards the total.
///
/// # Errors
///
/// [`crate::error::EngineError::TimeOverflow`] when a sum leaves the representable range.
pub fn calculate_worked_time(facts: &FactStore, range: &DayRange) -> EngineResult<WorkedTimeResult> {
    let mut per_day: BTreeMap<NaiveDate, Duration> =
        range.days().map(|day| (day, Duration::zero())).collect();
    let mut out_of_schedule = Duration::zero();
    let mut total = Duration::zero();

    for entry in facts.work_entries() {
        let worked = entry.worked();
        let day = entry.day();
        if range.contains(day) {
            accumulate(
                per_day.entry(day).or_insert_with(Duration::zero),
                worked,
                "worked",
            )?;
        } else {
            accumulate(&mut out_of_schedule, worked, "worked")?;
        }
        accumulate(&mut total, worked, "worked")?;
    }

    Ok(WorkedTimeResult {
        per_day,
        out_of_schedule,
        total,
    })
}
