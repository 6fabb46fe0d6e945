//! Error types for the working-time ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while interpreting ledger input
//! and computing the report.

use thiserror::Error;

/// The main error type for the working-time ledger.
///
/// Every fault raised while interpreting a line is fatal except
/// [`EngineError::UnknownCommand`], which the interpreter only reports.
///
/// # Example
///
/// ```
/// use arbeitszeit::error::EngineError;
///
/// let error = EngineError::MalformedDuration {
///     literal: "1H".to_string(),
/// };
/// assert_eq!(error.to_string(), "Period \"1H\" must be of format PTxHxM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date/time literal could not be parsed.
    #[error("Unable to parse date/time \"{literal}\"")]
    MalformedLiteral {
        /// The literal as written in the input.
        literal: String,
    },

    /// An interval ends before it starts.
    #[error("Interval \"{interval}\" ends before its starting time.")]
    InvalidInterval {
        /// The interval as written in the input.
        interval: String,
    },

    /// A duration literal did not match `PT<h>H<m>M`.
    #[error("Period \"{literal}\" must be of format PTxHxM")]
    MalformedDuration {
        /// The literal as written in the input.
        literal: String,
    },

    /// A weekday list contained an unknown code or was empty.
    #[error("Unknown weekday \"{token}\" (expected MO, TU, WE, TH, FR, SA or SU)")]
    UnknownWeekday {
        /// The offending weekday code.
        token: String,
    },

    /// A command was given without one of its required named options.
    #[error("No \"{option}\" parameter for command \"{command}\".")]
    MissingRequiredOption {
        /// The command name.
        command: String,
        /// The missing option key.
        option: String,
    },

    /// A command was given without its positional argument.
    #[error("Command \"{command}\" requires an argument.")]
    MissingArgument {
        /// The command name.
        command: String,
    },

    /// A command was given a named option it does not accept.
    #[error("Command \"{command}\" does not accept option \"{option}\".")]
    UnexpectedOption {
        /// The command name.
        command: String,
        /// The rejected option key.
        option: String,
    },

    /// A named option carried a value of the wrong shape.
    #[error("Invalid value \"{value}\" for option \"{option}\": {message}")]
    InvalidOption {
        /// The option key.
        option: String,
        /// The value as written in the input.
        value: String,
        /// What was expected instead.
        message: String,
    },

    /// The command name is not known. Reported as a warning, never fatal.
    #[error("On line {line}: Unknown command \"{command}\".")]
    UnknownCommand {
        /// The 1-based line number.
        line: usize,
        /// The unrecognized command name.
        command: String,
    },

    /// Accumulated time left the range a duration can represent.
    #[error("Accumulated {quantity} time is too large")]
    TimeOverflow {
        /// Which quantity overflowed (`scheduled`, `worked` or `balance`).
        quantity: &'static str,
    },

    /// The input declared no work schedule at all.
    #[error("No work schedule given")]
    NoScheduleDefined,

    /// A line fault annotated with where it happened.
    #[error("On line {line}: {source}")]
    Line {
        /// The 1-based line number.
        line: usize,
        /// The raw line without its line terminator.
        raw: String,
        /// The underlying fault.
        #[source]
        source: Box<EngineError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input source could not be opened or read.
    #[error("Unable to read input '{path}': {message}")]
    InputUnreadable {
        /// The input path, or `-` for stdin.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// The report could not be written.
    #[error("Unable to write report: {message}")]
    OutputFailed {
        /// The underlying I/O or serialization error.
        message: String,
    },
}

impl EngineError {
    /// Wraps a line fault with its line number and raw text.
    pub fn on_line(self, line: usize, raw: &str) -> Self {
        EngineError::Line {
            line,
            raw: raw.trim_end_matches(['\n', '\r']).to_string(),
            source: Box::new(self),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
