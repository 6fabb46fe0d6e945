//! Literal parsing for ledger input.
//!
//! Dates, times and intervals are resolved through a [`LiteralContext`],
//! which carries the default date used to complete partial literals.
//! Durations are context free.

mod context;
mod duration;

pub use context::LiteralContext;
pub use duration::{MAX_MINUTES, parse_duration};
