//! Core data models for the working-time ledger.
//!
//! This module contains the facts parsed from ledger input and the report
//! derived from them.

mod fact_store;
mod holiday;
mod interval;
mod ledger;
mod schedule;
mod weekdays;
mod work_entry;

pub use fact_store::FactStore;
pub use holiday::HolidayRule;
pub use interval::Interval;
pub use ledger::{LedgerLine, LedgerTotals, Report, floor_minutes, format_minutes};
pub use schedule::WorkSchedule;
pub use weekdays::Weekdays;
pub use work_entry::WorkEntry;
