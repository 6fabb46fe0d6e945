//! Working-time ledger.
//!
//! This crate reads a small line-oriented language describing a nominal work
//! schedule, holidays, vacations and logged work, and produces a day-by-day
//! report of scheduled (SOLL) against worked (IST) time with a running
//! balance (AKT).
//!
//! ```
//! use arbeitszeit::build_report;
//! use arbeitszeit::config::Settings;
//!
//! let input = "\
//! schedule PT8H valid=2024-01-01/2024-01-05   # Monday to Friday
//! for 2024-01-01
//! work 08:00/16:30 lunch=PT0H30M
//! ";
//! let report = build_report(input.lines(), Settings::default()).unwrap();
//! assert_eq!(report.days[0].balance_minutes, 0);
//! assert_eq!(report.totals.balance_minutes, -4 * 480);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod literal;
pub mod models;
pub mod recurrence;

use config::Settings;
use error::EngineResult;
use interpreter::Interpreter;
use models::Report;

/// Interprets every line and computes the report.
///
/// Lines are numbered from 1. Unknown commands are skipped and `dt` echoes
/// are dropped; use [`Interpreter`] directly to observe them.
///
/// # Errors
///
/// The first fault of any line, wrapped with its line number, or
/// [`error::EngineError::NoScheduleDefined`].
pub fn build_report<I, S>(lines: I, settings: Settings) -> EngineResult<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut interpreter = Interpreter::new(settings);
    for (index, line) in lines.into_iter().enumerate() {
        interpreter.process_line(index + 1, line.as_ref())?;
    }
    calculation::calculate_report(interpreter.facts())
}
