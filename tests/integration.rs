//! End-to-end tests for the working-time ledger.
//!
//! Every test feeds ledger text through the public entry points and checks
//! the resulting report:
//! - Schedules, weekday filters and overlapping schedules
//! - Holidays (fixed and Easter-relative)
//! - Vacation and sick leave
//! - Work entries, lunch breaks and out-of-schedule time
//! - Text and JSON rendering
//! - Error cases with their line numbers

use std::io::Write;

use chrono::NaiveDate;
use serde_json::Value;

use arbeitszeit::build_report;
use arbeitszeit::config::{ConfigLoader, Settings};
use arbeitszeit::error::EngineError;
use arbeitszeit::interpreter::{Interpreter, LineOutcome};
use arbeitszeit::models::{LedgerLine, Report, Weekdays};

// =============================================================================
// Test Helpers
// =============================================================================

fn report(input: &str) -> Report {
    build_report(input.lines(), Settings::default()).expect("input should be accepted")
}

fn failure(input: &str) -> EngineError {
    build_report(input.lines(), Settings::default()).expect_err("input should be rejected")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day<'a>(report: &'a Report, s: &str) -> &'a LedgerLine {
    let wanted = date(s);
    report
        .days
        .iter()
        .find(|line| line.date == wanted)
        .unwrap_or_else(|| panic!("{} not in report", s))
}

/// Unwraps the line wrapper and returns the line number with the inner fault.
fn line_fault(err: EngineError) -> (usize, EngineError) {
    match err {
        EngineError::Line { line, source, .. } => (line, *source),
        other => panic!("expected a line error, got {:?}", other),
    }
}

// =============================================================================
// Schedules
// =============================================================================

#[test]
fn test_single_week_without_work() {
    // 2024-01-01 is a Monday
    let report = report("schedule PT8H valid=2024-01-01/2024-01-07");

    assert_eq!(report.days.len(), 7);
    let scheduled: Vec<i64> = report.days.iter().map(|d| d.scheduled_minutes).collect();
    assert_eq!(scheduled, vec![480, 480, 480, 480, 480, 0, 0]);
    assert_eq!(report.totals.scheduled_minutes, 2400);
    assert_eq!(report.totals.worked_minutes, 0);
    assert_eq!(report.totals.balance_minutes, -2400);
}

#[test]
fn test_byweekday_restricts_days() {
    let report = report("schedule PT4H valid=2024-01-01/2024-01-07 byweekday=MO,WE,sa");

    let scheduled: Vec<i64> = report.days.iter().map(|d| d.scheduled_minutes).collect();
    assert_eq!(scheduled, vec![240, 0, 240, 0, 0, 240, 0]);
}

#[test]
fn test_overlapping_schedules_add_up() {
    let report = report(
        "schedule PT6H valid=2024-01-01/2024-01-31\n\
         schedule PT2H valid=2024-01-15/2024-01-19\n",
    );

    assert_eq!(day(&report, "2024-01-12").scheduled_minutes, 360);
    assert_eq!(day(&report, "2024-01-15").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-19").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-22").scheduled_minutes, 360);
}

#[test]
fn test_report_covers_union_of_schedules() {
    let report = report(
        "schedule PT8H valid=2024-03-01/2024-03-03\n\
         schedule PT8H valid=2024-02-27/2024-02-28\n",
    );

    assert_eq!(report.days.first().unwrap().date, date("2024-02-27"));
    assert_eq!(report.days.last().unwrap().date, date("2024-03-03"));
    // Leap day is inside the union even though no schedule covers it.
    assert_eq!(day(&report, "2024-02-29").scheduled_minutes, 0);
    assert_eq!(report.days.len(), 6);
}

#[test]
fn test_total_scheduled_is_sum_of_days() {
    let report = report(
        "schedule PT7H30M valid=2024-01-01/2024-06-30\n\
         holiday 2024-01-01\n\
         holiday byeaster=1\n\
         vacation 2024-03-04/2024-03-08\n",
    );

    let sum: i64 = report.days.iter().map(|d| d.scheduled_minutes).sum();
    assert_eq!(report.totals.scheduled_minutes, sum);
}

#[test]
fn test_schedule_without_amount_owes_nothing() {
    let report = report("schedule valid=2024-01-01/2024-01-02");

    assert_eq!(report.days.len(), 2);
    assert_eq!(report.totals.scheduled_minutes, 0);
}

#[test]
fn test_configured_default_weekdays() {
    let settings = Settings {
        default_weekdays: "MO,TU,WE,TH".parse::<Weekdays>().unwrap(),
        ..Settings::default()
    };
    let report = build_report(["schedule PT10H valid=2024-01-01/2024-01-07"], settings).unwrap();

    assert_eq!(report.totals.scheduled_minutes, 4 * 600);
    assert_eq!(report.days[4].scheduled_minutes, 0);
}

// =============================================================================
// Holidays
// =============================================================================

#[test]
fn test_fixed_holiday_recurs_every_year() {
    let report = report(
        "schedule PT8H valid=2023-12-20/2025-01-10\n\
         holiday 2000-12-25\n",
    );

    assert_eq!(day(&report, "2023-12-25").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-12-25").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-12-24").scheduled_minutes, 480);
}

#[test]
fn test_bare_holiday_falls_on_new_year() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-02\n\
         holiday\n",
    );

    assert_eq!(day(&report, "2024-01-01").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-01-02").scheduled_minutes, 480);
}

#[test]
fn test_easter_relative_holidays() {
    // Easter Sunday 2024 is March 31.
    let report = report(
        "schedule PT8H valid=2024-03-25/2024-04-05\n\
         holiday byeaster=-2   # Good Friday\n\
         holiday byeaster=1    # Easter Monday\n",
    );

    assert_eq!(day(&report, "2024-03-28").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-03-29").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-04-01").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-04-02").scheduled_minutes, 480);
}

#[test]
fn test_byeaster_ignores_the_date_argument() {
    let report = report(
        "schedule PT8H valid=2024-03-25/2024-04-05\n\
         holiday 2024-03-26 byeaster=1\n",
    );

    assert_eq!(day(&report, "2024-03-26").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-04-01").scheduled_minutes, 0);
}

#[test]
fn test_holiday_anchor_from_settings() {
    let settings = Settings {
        holiday_anchor: date("2020-01-03"),
        ..Settings::default()
    };
    let report = build_report(
        ["schedule PT8H valid=2024-01-01/2024-01-05", "holiday"],
        settings,
    )
    .unwrap();

    assert_eq!(report.days[0].scheduled_minutes, 480);
    assert_eq!(report.days[2].scheduled_minutes, 0);
}

// =============================================================================
// Absences
// =============================================================================

#[test]
fn test_vacation_and_sick_clear_obligation() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-12\n\
         vacation 2024-01-02/2024-01-03\n\
         sick 2024-01-10/2024-01-10\n",
    );

    assert_eq!(day(&report, "2024-01-01").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-02").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-01-03").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-01-04").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-10").scheduled_minutes, 0);
    assert_eq!(report.totals.scheduled_minutes, 7 * 480);
}

#[test]
fn test_vacation_includes_its_last_calendar_day() {
    // The end is on 2024-01-03 at 09:00; the whole day is off.
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-05\n\
         vacation 2024-01-02T12:00/2024-01-03T09:00\n",
    );

    assert_eq!(day(&report, "2024-01-02").scheduled_minutes, 0);
    assert_eq!(day(&report, "2024-01-03").scheduled_minutes, 0);
}

#[test]
fn test_work_on_a_holiday_is_still_credited() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-01\n\
         holiday 2024-01-01\n\
         work 2024-01-01T10:00/12:00\n",
    );

    assert_eq!(report.days[0].scheduled_minutes, 0);
    assert_eq!(report.days[0].worked_minutes, 120);
    assert_eq!(report.totals.balance_minutes, 120);
}

// =============================================================================
// Work Entries
// =============================================================================

#[test]
fn test_for_sets_default_date_for_bare_times() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-05\n\
         for 2024-01-02\n\
         work 08:00/12:00\n\
         work 13:00/17:15\n\
         for 2024-01-03\n\
         work 09:00/17:00 lunch=PT45M\n",
    );

    assert_eq!(day(&report, "2024-01-01").worked_minutes, 0);
    assert_eq!(day(&report, "2024-01-02").worked_minutes, 495);
    assert_eq!(day(&report, "2024-01-03").worked_minutes, 435);
    assert_eq!(day(&report, "2024-01-02").balance_minutes, -480 + 15);
    assert_eq!(day(&report, "2024-01-03").balance_minutes, -480 + 15 - 45);
}

#[test]
fn test_balance_is_running_sum() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-05\n\
         for 2024-01-01\n\
         work 08:00/18:00\n\
         for 2024-01-04\n\
         work 08:00/12:00\n",
    );

    let mut running = 0;
    for line in &report.days {
        running += line.worked_minutes - line.scheduled_minutes;
        assert_eq!(line.balance_minutes, running);
    }
    assert_eq!(report.totals.balance_minutes, running);
}

#[test]
fn test_overnight_entry_is_booked_on_start_day() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-03\n\
         work 2024-01-01T22:00/2024-01-02T06:00\n",
    );

    assert_eq!(day(&report, "2024-01-01").worked_minutes, 480);
    assert_eq!(day(&report, "2024-01-02").worked_minutes, 0);
}

#[test]
fn test_out_of_schedule_work() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-02\n\
         work 2024-01-06T09:00/12:30\n",
    );

    assert_eq!(report.out_of_schedule_minutes, Some(210));
    assert_eq!(report.days.last().unwrap().balance_minutes, -960);
    assert_eq!(report.totals.worked_minutes, 210);
    assert_eq!(report.totals.balance_minutes, -750);
}

#[test]
fn test_long_lunch_gives_negative_work() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-01\n\
         work 2024-01-01T12:00/12:15 lunch=PT1H\n",
    );

    assert_eq!(report.days[0].worked_minutes, -45);
    assert_eq!(report.totals.balance_minutes, -525);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_text_report() {
    let report = report(
        "# two days of January\n\
         schedule PT8H valid=2024-01-01/2024-01-02\n\
         \n\
         for 2024-01-01\n\
         work 07:45/16:50 lunch=PT1H   # long day\n\
         work 2024-01-09T10:00/11:00\n",
    );

    assert_eq!(
        report.to_string(),
        "2024-01-01: SOLL 08:00 IST 08:05 AKT 00:05\n\
         2024-01-02: SOLL 08:00 IST 00:00 AKT -07:55\n\
         OUT OF SCHEDULE TIME: 01:00\n\
         TOTAL: SOLL 16:00 IST 09:05 AKT -06:55\n"
    );
}

#[test]
fn test_json_report() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-01\n\
         work 2024-01-01T08:00/17:00 lunch=PT30M\n",
    );

    let json: Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["days"][0]["date"], "2024-01-01");
    assert_eq!(json["days"][0]["scheduled_minutes"], 480);
    assert_eq!(json["days"][0]["worked_minutes"], 510);
    assert_eq!(json["days"][0]["balance_minutes"], 30);
    assert_eq!(json["out_of_schedule_minutes"], Value::Null);
    assert_eq!(json["totals"]["balance_minutes"], 30);
}

// =============================================================================
// Interpreter Outcomes
// =============================================================================

#[test]
fn test_dt_echoes_and_unknown_commands_are_skipped() {
    let mut interpreter = Interpreter::new(Settings::default());

    assert_eq!(
        interpreter.process_line(1, "   # nothing here").unwrap(),
        LineOutcome::Blank
    );
    let echoed = interpreter.process_line(2, "dt 2024-05-01T08:30").unwrap();
    assert_eq!(
        echoed,
        LineOutcome::Echo(date("2024-05-01").and_hms_opt(8, 30, 0).unwrap())
    );
    assert_eq!(
        interpreter.process_line(3, "overtime PT2H").unwrap(),
        LineOutcome::UnknownCommand("overtime".to_string())
    );
    assert!(interpreter.facts().schedules().is_empty());
}

#[test]
fn test_unknown_commands_do_not_stop_report() {
    let report = report(
        "schedule PT8H valid=2024-01-01/2024-01-01\n\
         bonus PT1H\n\
         work 2024-01-01T08:00/16:00\n",
    );

    assert_eq!(report.totals.balance_minutes, 0);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_no_schedule_is_an_error() {
    let err = failure("work 2024-01-01T08:00/16:00\n");
    assert!(matches!(err, EngineError::NoScheduleDefined));
    assert_eq!(err.to_string(), "No work schedule given");
}

#[test]
fn test_empty_input_has_no_schedule() {
    let err = failure("");
    assert!(matches!(err, EngineError::NoScheduleDefined));
}

#[test]
fn test_schedule_without_valid() {
    let (line, err) = line_fault(failure("\n\nschedule PT8H\n"));
    assert_eq!(line, 3);
    assert_eq!(
        err.to_string(),
        "No \"valid\" parameter for command \"schedule\"."
    );
}

#[test]
fn test_interval_ending_before_start() {
    let (line, err) = line_fault(failure(
        "schedule PT8H valid=2024-01-01/2024-01-31\n\
         work 2024-01-02T17:00/08:00\n",
    ));
    assert_eq!(line, 2);
    assert!(matches!(err, EngineError::InvalidInterval { .. }));
}

#[test]
fn test_malformed_date_reports_offending_line() {
    let err = failure("for 2024-13-01\n");
    match &err {
        EngineError::Line { line, raw, .. } => {
            assert_eq!(*line, 1);
            assert_eq!(raw, "for 2024-13-01");
        }
        other => panic!("expected a line error, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "On line 1: Unable to parse date/time \"2024-13-01\""
    );
}

#[test]
fn test_malformed_duration() {
    let (_, err) = line_fault(failure("schedule 8h valid=2024-01-01/2024-01-02\n"));
    assert_eq!(err.to_string(), "Period \"8h\" must be of format PTxHxM");
}

#[test]
fn test_oversized_durations_are_rejected() {
    let (line, err) = line_fault(failure(
        "schedule PT100000000000000M valid=2024-01-01/2024-01-05\n",
    ));
    assert_eq!(line, 1);
    assert!(matches!(err, EngineError::MalformedDuration { .. }));

    let (line, err) = line_fault(failure(
        "schedule PT8H valid=2024-01-01/2024-01-05\n\
         work 2024-01-01T08:00/09:00 lunch=PT100000000000000M\n\
         work 2024-01-02T08:00/09:00 lunch=PT100000000000000M\n",
    ));
    assert_eq!(line, 2);
    assert!(matches!(err, EngineError::MalformedDuration { .. }));
}

#[test]
fn test_largest_durations_do_not_overflow() {
    let report = report(
        "schedule PT4294967295M valid=2024-01-01/2024-12-31\n\
         work 2024-01-01T08:00/09:00 lunch=PT4294967295M\n\
         work 2024-01-02T08:00/09:00 lunch=PT4294967295M\n",
    );

    assert_eq!(report.days[0].scheduled_minutes, 4_294_967_295);
    assert_eq!(report.totals.worked_minutes, 2 * (60 - 4_294_967_295));
}

#[test]
fn test_unexpected_option_is_rejected() {
    let (_, err) = line_fault(failure("work 2024-01-01T08:00/16:00 lunh=PT30M\n"));
    assert!(matches!(err, EngineError::UnexpectedOption { .. }));
}

#[test]
fn test_unknown_weekday_is_rejected() {
    let (_, err) = line_fault(failure("schedule PT8H valid=2024-01-01/2024-01-02 byweekday=MO,XX\n"));
    assert!(matches!(err, EngineError::UnknownWeekday { .. }));
}

#[test]
fn test_first_error_wins() {
    let (line, _) = line_fault(failure(
        "schedule PT8H valid=2024-01-01/2024-01-02\n\
         work nonsense\n\
         for garbage\n",
    ));
    assert_eq!(line, 2);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_settings_file_drives_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_weekdays: MO,TU").unwrap();
    writeln!(file, "holiday_anchor: 2024-01-02").unwrap();

    let settings = ConfigLoader::load(file.path()).unwrap();
    let report = build_report(
        ["schedule PT8H valid=2024-01-01/2024-01-07", "holiday"],
        settings,
    )
    .unwrap();

    assert_eq!(report.totals.scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-01").scheduled_minutes, 480);
    assert_eq!(day(&report, "2024-01-02").scheduled_minutes, 0);
}
