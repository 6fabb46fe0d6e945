//! The fact store: everything the interpreter has learned from the input.

use chrono::NaiveDate;

use crate::recurrence::{DayRange, is_holiday, is_vacation};

use super::{HolidayRule, Interval, WorkEntry, WorkSchedule};

/// Append-only collections of parsed facts.
///
/// The union of all schedule validity spans is kept up to date as schedules
/// are added, so the accounting pass does not have to recompute it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactStore {
    schedules: Vec<WorkSchedule>,
    holidays: Vec<HolidayRule>,
    vacations: Vec<Interval>,
    work_entries: Vec<WorkEntry>,
    day_range: Option<DayRange>,
}

impl FactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schedule and widens the day range to cover it.
    pub fn add_schedule(&mut self, schedule: WorkSchedule) {
        let covered = schedule.day_range();
        self.day_range = Some(match self.day_range {
            Some(range) => range.union(&covered),
            None => covered,
        });
        self.schedules.push(schedule);
    }

    /// Registers a holiday rule.
    pub fn add_holiday(&mut self, rule: HolidayRule) {
        self.holidays.push(rule);
    }

    /// Registers a vacation (or sick leave) span.
    pub fn add_vacation(&mut self, span: Interval) {
        self.vacations.push(span);
    }

    /// Registers a logged shift.
    pub fn add_work_entry(&mut self, entry: WorkEntry) {
        self.work_entries.push(entry);
    }

    /// All schedules, in declaration order.
    pub fn schedules(&self) -> &[WorkSchedule] {
        &self.schedules
    }

    /// All holiday rules, in declaration order.
    pub fn holidays(&self) -> &[HolidayRule] {
        &self.holidays
    }

    /// All vacation spans, in declaration order.
    pub fn vacations(&self) -> &[Interval] {
        &self.vacations
    }

    /// All logged shifts, in declaration order.
    pub fn work_entries(&self) -> &[WorkEntry] {
        &self.work_entries
    }

    /// The inclusive range of days covered by any schedule, if one exists.
    pub fn day_range(&self) -> Option<DayRange> {
        self.day_range
    }

    /// Checks whether no obligation applies on `day` because of a holiday or
    /// a vacation.
    pub fn is_day_off(&self, day: NaiveDate) -> bool {
        is_holiday(day, &self.holidays) || is_vacation(day, &self.vacations)
    }
}
