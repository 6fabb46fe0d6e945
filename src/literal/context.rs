//! Date/time and interval literals, resolved against a default date.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Interval;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 1] = ["%Y-%m-%d"];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parser configuration for date/time literals.
///
/// Holds the default date set by the last `for` command. The context is a
/// plain value: setting a new default returns a new context instead of
/// mutating shared state.
///
/// # Example
///
/// ```
/// use arbeitszeit::literal::LiteralContext;
///
/// let context = LiteralContext::new().with_default_from("2024-01-15").unwrap();
/// let shift = context.parse_interval("08:00/16:30").unwrap();
/// assert_eq!(shift.start.to_string(), "2024-01-15 08:00:00");
/// assert_eq!(shift.end.to_string(), "2024-01-15 16:30:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralContext {
    default: Option<NaiveDateTime>,
}

impl LiteralContext {
    /// A context without a default date.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current default date, if one was set.
    pub fn default_date(&self) -> Option<NaiveDateTime> {
        self.default
    }

    /// A copy of this context using `default` for partial literals.
    pub fn with_default(self, default: NaiveDateTime) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// Parses `text` and returns a context using it as the default date.
    pub fn with_default_from(self, text: &str) -> EngineResult<Self> {
        let default = self.parse_datetime(text, None)?;
        debug!(default = %default, "default date set");
        Ok(self.with_default(default))
    }

    /// Parses a date/time literal.
    ///
    /// Components missing from the literal are taken from `fallback`, or from
    /// the context's default date when no fallback is given:
    ///
    /// - a bare time (`08:00`) takes the fallback's date, or today's local
    ///   date when there is nothing to fall back on;
    /// - a bare date (`2024-01-15`) takes the fallback's time of day, or
    ///   midnight.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedLiteral`] for anything else.
    pub fn parse_datetime(
        &self,
        text: &str,
        fallback: Option<NaiveDateTime>,
    ) -> EngineResult<NaiveDateTime> {
        let fallback = fallback.or(self.default);

        if let Some(datetime) = parse_with(&DATETIME_FORMATS, |f| {
            NaiveDateTime::parse_from_str(text, f)
        }) {
            return Ok(datetime);
        }

        if let Some(date) = parse_with(&DATE_FORMATS, |f| NaiveDate::parse_from_str(text, f)) {
            let time = fallback.map_or(NaiveTime::MIN, |f| f.time());
            return Ok(date.and_time(time));
        }

        let bare_time = text.strip_prefix('T').unwrap_or(text);
        if let Some(time) = parse_with(&TIME_FORMATS, |f| NaiveTime::parse_from_str(bare_time, f))
        {
            let date = fallback.map_or_else(|| Local::now().date_naive(), |f| f.date());
            return Ok(date.and_time(time));
        }

        Err(EngineError::MalformedLiteral {
            literal: text.to_string(),
        })
    }

    /// Parses an interval literal `start/end`.
    ///
    /// The text is split on the first `/`. The start resolves against the
    /// context's default date; the end resolves against the start, so
    /// `2024-01-15T08:00/16:30` ends on the same day.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedLiteral`] if there is no `/` or either side
    ///   does not parse
    /// - [`EngineError::InvalidInterval`] if the end lies before the start
    pub fn parse_interval(&self, text: &str) -> EngineResult<Interval> {
        let (start, end) = text
            .split_once('/')
            .ok_or_else(|| EngineError::MalformedLiteral {
                literal: text.to_string(),
            })?;

        let start = self.parse_datetime(start, None)?;
        let end = self.parse_datetime(end, Some(start))?;
        if end < start {
            return Err(EngineError::InvalidInterval {
                interval: text.to_string(),
            });
        }

        Ok(Interval { start, end })
    }
}

fn parse_with<T, E>(formats: &[&str], parse: impl Fn(&str) -> Result<T, E>) -> Option<T> {
    formats.iter().find_map(|format| parse(format).ok())
}
