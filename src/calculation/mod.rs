//! Accounting over the interpreted facts.
//!
//! This module expands schedules into per-day scheduled time, books work
//! entries into per-day worked time, and walks the day range once to build
//! the ledger with its running balance.

mod ledger;
mod scheduled_time;
mod worked_time;

use chrono::Duration;

use crate::error::{EngineError, EngineResult};

pub use ledger::calculate_report;
pub use scheduled_time::{ScheduledTimeResult, calculate_scheduled_time};
pub use worked_time::{WorkedTimeResult, calculate_worked_time};

/// Adds `amount` to `total`, failing instead of overflowing.
fn accumulate(total: &mut Duration, amount: Duration, quantity: &'static str) -> EngineResult<()> {
    *total = total
        .checked_add(&amount)
        .ok_or(EngineError::TimeOverflow { quantity })?;
    Ok(())
}
