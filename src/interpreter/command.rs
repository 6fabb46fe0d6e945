//! Typed ledger commands.
//!
//! Each [`Command`] variant carries exactly the arguments its command
//! accepts. Context-free values (durations, weekday lists, Easter offsets)
//! are parsed here; date and interval literals stay as text because they
//! resolve against the default date at execution time.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::literal::parse_duration;
use crate::models::Weekdays;

use super::tokenizer::RawLine;

/// Which absence command registered a vacation span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    /// `vacation <interval>`
    Vacation,
    /// `sick <interval>`
    Sick,
}

/// A validated ledger command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `for <date>`: sets the default date.
    For {
        /// Date literal.
        date: String,
    },
    /// `schedule <duration> valid=<interval> [byweekday=<list>]`
    Schedule {
        /// Time owed per matching day; zero when omitted.
        amount: Duration,
        /// Validity interval literal.
        valid: String,
        /// Weekday filter; the configured default when omitted.
        weekdays: Option<Weekdays>,
    },
    /// `holiday [<date>] [byeaster=<offset>]`
    Holiday {
        /// Anchor date literal; the configured anchor when omitted.
        date: Option<String>,
        /// Days relative to Easter Sunday.
        easter_offset: Option<i64>,
    },
    /// `vacation <interval>` or `sick <interval>`
    Absence {
        /// Which command was used.
        kind: AbsenceKind,
        /// Interval literal.
        span: String,
    },
    /// `work <interval> [lunch=<duration>]`
    Work {
        /// Interval literal.
        span: String,
        /// Unpaid break; zero when omitted.
        lunch: Duration,
    },
    /// `dt <date>`: echoes the parsed date.
    Dt {
        /// Date literal.
        date: String,
    },
}

impl Command {
    /// Builds a command from a tokenized line.
    ///
    /// Returns `Ok(None)` when the command name is unknown.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingArgument`] when a required positional argument is absent
    /// - [`EngineError::MissingRequiredOption`] when `schedule` has no `valid`
    /// - [`EngineError::UnexpectedOption`] for options the command does not accept
    /// - [`EngineError::MalformedDuration`], [`EngineError::UnknownWeekday`] or
    ///   [`EngineError::InvalidOption`] for malformed option values
    pub fn from_raw(line: RawLine) -> EngineResult<Option<Command>> {
        let mut args = Arguments {
            command: line.command,
            positional: line.positional,
            options: line.options,
        };

        let name = args.command.clone();
        let command = match name.as_str() {
            "for" => Command::For {
                date: args.required()?,
            },
            "schedule" => {
                let valid = args
                    .option("valid")
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| EngineError::MissingRequiredOption {
                        command: args.command.clone(),
                        option: "valid".to_string(),
                    })?;
                let amount = parse_duration(args.positional.as_deref().unwrap_or_default())?;
                let weekdays = args
                    .option("byweekday")
                    .map(|list| list.parse::<Weekdays>())
                    .transpose()?;
                Command::Schedule {
                    amount,
                    valid,
                    weekdays,
                }
            }
            "holiday" => {
                let easter_offset = args
                    .option("byeaster")
                    .map(|value| {
                        value.parse::<i64>().map_err(|_| EngineError::InvalidOption {
                            option: "byeaster".to_string(),
                            value: value.clone(),
                            message: "expected a whole number of days".to_string(),
                        })
                    })
                    .transpose()?;
                Command::Holiday {
                    date: args.positional.take(),
                    easter_offset,
                }
            }
            "vacation" => Command::Absence {
                kind: AbsenceKind::Vacation,
                span: args.required()?,
            },
            "sick" => Command::Absence {
                kind: AbsenceKind::Sick,
                span: args.required()?,
            },
            "work" => {
                let lunch = parse_duration(args.option("lunch").as_deref().unwrap_or_default())?;
                Command::Work {
                    span: args.required()?,
                    lunch,
                }
            }
            "dt" => Command::Dt {
                date: args.required()?,
            },
            _ => return Ok(None),
        };

        args.finish()?;
        Ok(Some(command))
    }

    /// The command name as written in the input.
    pub fn name(&self) -> &'static str {
        match self {
            Command::For { .. } => "for",
            Command::Schedule { .. } => "schedule",
            Command::Holiday { .. } => "holiday",
            Command::Absence {
                kind: AbsenceKind::Vacation,
                ..
            } => "vacation",
            Command::Absence {
                kind: AbsenceKind::Sick,
                ..
            } => "sick",
            Command::Work { .. } => "work",
            Command::Dt { .. } => "dt",
        }
    }
}

/// Arguments of one line, consumed as the command picks them up.
struct Arguments {
    command: String,
    positional: Option<String>,
    options: BTreeMap<String, String>,
}

impl Arguments {
    fn required(&mut self) -> EngineResult<String> {
        self.positional
            .take()
            .ok_or_else(|| EngineError::MissingArgument {
                command: self.command.clone(),
            })
    }

    fn option(&mut self, key: &str) -> Option<String> {
        self.options.remove(key)
    }

    /// Fails on the first option nobody asked for.
    fn finish(self) -> EngineResult<()> {
        match self.options.into_keys().next() {
            Some(option) => Err(EngineError::UnexpectedOption {
                command: self.command,
                option,
            }),
            None => Ok(()),
        }
    }
}
