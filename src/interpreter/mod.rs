//! Command interpreter for ledger input.
//!
//! A line is tokenized into a command name, at most one positional argument
//! and `key=value` options, turned into a typed [`Command`], and applied to
//! the [`crate::models::FactStore`].

mod command;
mod dispatch;
mod tokenizer;

pub use command::{AbsenceKind, Command};
pub use dispatch::{Interpreter, LineOutcome};
pub use tokenizer::{RawLine, strip_comment, tokenize};
