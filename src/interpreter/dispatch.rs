//! Line-by-line interpretation of ledger input.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::EngineResult;
use crate::literal::LiteralContext;
use crate::models::{FactStore, HolidayRule, WorkEntry, WorkSchedule};

use super::command::Command;
use super::tokenizer::tokenize;

/// What processing a single line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment-only line.
    Blank,
    /// A command updated the fact store or the default date.
    Applied,
    /// A `dt` command parsed this date.
    Echo(NaiveDateTime),
    /// The command name is unknown; the line was ignored.
    UnknownCommand(String),
}

/// Interprets ledger input one line at a time.
///
/// Lines share nothing but the fact store and the literal context; the
/// context is replaced as a whole whenever a `for` command sets a new
/// default date.
///
/// # Example
///
/// ```
/// use arbeitszeit::config::Settings;
/// use arbeitszeit::interpreter::{Interpreter, LineOutcome};
///
/// let mut interpreter = Interpreter::new(Settings::default());
/// interpreter.process_line(1, "schedule PT8H valid=2024-01-01/2024-01-31").unwrap();
/// interpreter.process_line(2, "for 2024-01-02").unwrap();
/// interpreter.process_line(3, "work 08:00/16:30 lunch=PT30M").unwrap();
///
/// let outcome = interpreter.process_line(4, "overtime PT1H").unwrap();
/// assert_eq!(outcome, LineOutcome::UnknownCommand("overtime".to_string()));
///
/// let facts = interpreter.into_facts();
/// assert_eq!(facts.schedules().len(), 1);
/// assert_eq!(facts.work_entries().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    settings: Settings,
    context: LiteralContext,
    facts: FactStore,
}

impl Interpreter {
    /// Creates an interpreter with an empty fact store and no default date.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            context: LiteralContext::new(),
            facts: FactStore::new(),
        }
    }

    /// Processes one raw input line.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based position of the line in the whole input
    /// * `raw` - the line as read, with or without its terminator
    ///
    /// # Errors
    ///
    /// Any fault of a known command is returned wrapped in
    /// [`crate::error::EngineError::Line`], carrying the line number and
    /// the raw text. Unknown commands are not errors; they yield
    /// [`LineOutcome::UnknownCommand`].
    pub fn process_line(&mut self, line_number: usize, raw: &str) -> EngineResult<LineOutcome> {
        self.apply_line(line_number, raw)
            .map_err(|err| err.on_line(line_number, raw))
    }

    fn apply_line(&mut self, line_number: usize, raw: &str) -> EngineResult<LineOutcome> {
        let Some(line) = tokenize(raw) else {
            return Ok(LineOutcome::Blank);
        };

        if !line.superseded.is_empty() {
            warn!(
                line = line_number,
                ignored = ?line.superseded,
                "several positional arguments given, using the last one"
            );
        }

        let name = line.command.clone();
        match Command::from_raw(line)? {
            Some(command) => {
                debug!(line = line_number, command = command.name(), "interpreting");
                self.execute(command)
            }
            None => {
                debug!(line = line_number, command = %name, "unknown command");
                Ok(LineOutcome::UnknownCommand(name))
            }
        }
    }

    fn execute(&mut self, command: Command) -> EngineResult<LineOutcome> {
        match command {
            Command::For { date } => {
                self.context = self.context.with_default_from(&date)?;
            }
            Command::Schedule {
                amount,
                valid,
                weekdays,
            } => {
                let validity = self.context.parse_interval(&valid)?;
                self.facts.add_schedule(WorkSchedule {
                    amount,
                    validity,
                    weekdays: weekdays.unwrap_or(self.settings.default_weekdays),
                });
            }
            Command::Holiday {
                date,
                easter_offset,
            } => {
                let anchor = match date {
                    Some(date) => self.context.parse_datetime(&date, None)?.date(),
                    None => self.settings.holiday_anchor,
                };
                self.facts.add_holiday(match easter_offset {
                    Some(offset_days) => HolidayRule::EasterRelative { offset_days },
                    None => HolidayRule::Fixed { anchor },
                });
            }
            Command::Absence { span, .. } => {
                let span = self.context.parse_interval(&span)?;
                self.facts.add_vacation(span);
            }
            Command::Work { span, lunch } => {
                let span = self.context.parse_interval(&span)?;
                self.facts.add_work_entry(WorkEntry { span, lunch });
            }
            Command::Dt { date } => {
                return Ok(LineOutcome::Echo(self.context.parse_datetime(&date, None)?));
            }
        }
        Ok(LineOutcome::Applied)
    }

    /// The literal context in effect for the next line.
    pub fn context(&self) -> LiteralContext {
        self.context
    }

    /// Facts gathered so far.
    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    /// Consumes the interpreter, returning the gathered facts.
    pub fn into_facts(self) -> FactStore {
        self.facts
    }
}
