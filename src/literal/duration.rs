//! Duration literals of the form `PT<hours>H<minutes>M`.

use chrono::{Duration, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{EngineError, EngineResult};

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PT(?:(?P<hours>\d+)H)?(?:(?P<minutes>\d+)M)?$").expect("valid duration regex")
});

/// Largest duration literal accepted, in minutes.
pub const MAX_MINUTES: i64 = u32::MAX as i64;

/// Parses a duration literal.
///
/// The empty string is zero. Otherwise the literal must be `PT` followed by
/// hours (`8H`), minutes (`30M`) or both (`1H30M`), in that order. The
/// total may not exceed [`MAX_MINUTES`].
///
/// # Example
///
/// ```
/// use arbeitszeit::literal::parse_duration;
/// use chrono::Duration;
///
/// assert_eq!(parse_duration("").unwrap(), Duration::zero());
/// assert_eq!(parse_duration("PT1H30M").unwrap(), Duration::minutes(90));
/// assert!(parse_duration("1H").is_err());
/// ```
pub fn parse_duration(text: &str) -> EngineResult<Duration> {
    if text.is_empty() {
        return Ok(Duration::zero());
    }

    let malformed = || EngineError::MalformedDuration {
        literal: text.to_string(),
    };

    let captures = DURATION_RE.captures(text).ok_or_else(malformed)?;
    if captures.name("hours").is_none() && captures.name("minutes").is_none() {
        return Err(malformed());
    }

    let component = |name: &str| -> EngineResult<i64> {
        captures
            .name(name)
            .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| malformed()))
    };
    let hours = component("hours")?;
    let minutes = component("minutes")?;

    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .filter(|total| *total <= MAX_MINUTES)
        .and_then(TimeDelta::try_minutes)
        .ok_or_else(malformed)
}
