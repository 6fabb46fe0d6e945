//! The day-by-day ledger.

use chrono::Duration;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{FactStore, LedgerLine, LedgerTotals, Report, floor_minutes};

use super::accumulate;
use super::scheduled_time::calculate_scheduled_time;
use super::worked_time::calculate_worked_time;

/// Reconciles scheduled against worked time and builds the report.
///
/// Walks every day of the schedules' day range in order, carrying a running
/// balance of worked minus scheduled time. Worked time booked outside the
/// range is added to the balance once, after the last day, and only when it
/// is positive.
///
/// # Errors
///
/// Returns [`EngineError::NoScheduleDefined`] when the input declared no
/// schedule, or [`EngineError::TimeOverflow`] when a sum leaves the range a
/// duration can represent.
///
/// # Example
///
/// ```
/// use arbeitszeit::calculation::calculate_report;
/// use arbeitszeit::config::Settings;
/// use arbeitszeit::interpreter::Interpreter;
///
/// let mut interpreter = Interpreter::new(Settings::default());
/// interpreter.process_line(1, "schedule PT8H valid=2024-01-01/2024-01-02").unwrap();
/// interpreter.process_line(2, "work 2024-01-01T08:00/16:30 lunch=PT30M").unwrap();
///
/// let report = calculate_report(interpreter.facts()).unwrap();
/// assert_eq!(
///     report.to_string(),
///     "2024-01-01: SOLL 08:00 IST 08:00 AKT 00:00\n\
///      2024-01-02: SOLL 08:00 IST 00:00 AKT -08:00\n\
///      TOTAL: SOLL 16:00 IST 08:00 AKT -08:00\n"
/// );
/// ```
pub fn calculate_report(facts: &FactStore) -> EngineResult<Report> {
    let range = facts.day_range().ok_or(EngineError::NoScheduleDefined)?;

    let scheduled = calculate_scheduled_time(facts, &range)?;
    let worked = calculate_worked_time(facts, &range)?;

    let mut balance = Duration::zero();
    let mut days = Vec::with_capacity(range.len());
    for day in range.days() {
        let day_scheduled = scheduled.per_day.get(&day).copied().unwrap_or_else(Duration::zero);
        let day_worked = worked.per_day.get(&day).copied().unwrap_or_else(Duration::zero);
        let day_delta = day_worked
            .checked_sub(&day_scheduled)
            .ok_or(EngineError::TimeOverflow { quantity: "balance" })?;
        accumulate(&mut balance, day_delta, "balance")?;
        days.push(LedgerLine {
            date: day,
            scheduled_minutes: floor_minutes(day_scheduled),
            worked_minutes: floor_minutes(day_worked),
            balance_minutes: floor_minutes(balance),
        });
    }

    let out_of_schedule_minutes = if worked.out_of_schedule > Duration::zero() {
        accumulate(&mut balance, worked.out_of_schedule, "balance")?;
        Some(floor_minutes(worked.out_of_schedule))
    } else {
        None
    };

    let totals = LedgerTotals {
        scheduled_minutes: floor_minutes(scheduled.total),
        worked_minutes: floor_minutes(worked.total),
        balance_minutes: floor_minutes(balance),
    };

    info!(
        first_day = %range.first(),
        last_day = %range.last(),
        days_off = scheduled.days_off,
        scheduled_minutes = totals.scheduled_minutes,
        worked_minutes = totals.worked_minutes,
        balance_minutes = totals.balance_minutes,
        "ledger calculated"
    );

    Ok(Report {
        days,
        out_of_schedule_minutes,
        totals,
    })
}
