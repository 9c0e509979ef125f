use chrono::{FixedOffset, TimeZone};
use datewalk::calendar::{Calendar, CalendarError, FixedClock};
use datewalk::config::DisplayConfig;
use datewalk::report::{self, ReportOptions};

fn calendar_at(year: i32, month: u32, day: u32, hour: u32, minute: u32, offset_hours: i32) -> Calendar<FixedClock> {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    let at = offset.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap();
    Calendar::new(FixedClock::new(at))
}

#[test]
fn test_report_against_fixed_clock() {
    let calendar = calendar_at(2026, 10, 17, 9, 30, 2);
    let lines = report::build(&calendar, &ReportOptions::default()).unwrap();

    let expected = vec![
        "Current Date and Time: 2026-10-17T09:30:00",
        "Date in 2 Weeks: 2026-10-31",
        "Current date is AFTER the specified future date: 2024-12-25",
        "Difference in days between 2023-10-01 and 2025-10-01: 731 days",
        "--- Play Field ---",
        "Today: 2026-10-17",
        "Tomorrow: 2026-10-18",
        "Yesterday: 2026-10-16",
        "2026-10-17T07:30:00Z",
        "2026-10-17T07:30:00Z[UTC]",
        "Is date3 before date4? true",
        "Is date3 after date4? false",
        "Are both dates equal? false",
        "Now: 2026-10-17T09:30:00",
        "Next Week: 2026-10-24T09:30:00",
        "Last Month: 2026-09-17T09:30:00",
        "Duration in minutes: 150",
        "Years: 3",
        "Months: 41",
        "Weeks: 180",
        "Days: 1261",
        "Seconds Difference: 5000",
        "Nanoseconds Difference: 5000000000000",
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_report_before_and_equal_to_future_date() {
    let before = report::build(&calendar_at(2024, 6, 1, 12, 0, 0), &ReportOptions::default()).unwrap();
    assert_eq!(before[2], "Current date is BEFORE the specified future date: 2024-12-25");

    let equal = report::build(&calendar_at(2024, 12, 25, 12, 0, 0), &ReportOptions::default()).unwrap();
    assert_eq!(equal[2], "Current date is EQUAL to the specified future date: 2024-12-25");
}

#[test]
fn test_report_month_end_clamping() {
    let lines = report::build(&calendar_at(2025, 3, 31, 8, 0, 0), &ReportOptions::default()).unwrap();
    assert!(lines.contains(&"Last Month: 2025-02-28T08:00:00".to_string()));
}

#[test]
fn test_report_uses_configured_zone() {
    let display = DisplayConfig {
        zone: "Europe/Paris".to_string(),
    };
    let calendar = calendar_at(2026, 10, 17, 7, 30, 0);
    let lines = report::build(&calendar, &ReportOptions::from(&display)).unwrap();
    assert_eq!(lines[9], "2026-10-17T09:30:00+02:00[Europe/Paris]");
}

#[test]
fn test_report_rejects_unknown_zone() {
    let options = ReportOptions {
        zone: "Nowhere".to_string(),
    };
    let result = report::build(&calendar_at(2026, 10, 17, 7, 30, 0), &options);
    assert_eq!(result, Err(CalendarError::UnknownTimeZone("Nowhere".to_string())));
}

#[test]
fn test_print_writes_one_line_each() {
    let lines = vec!["first".to_string(), "second".to_string()];
    let mut out = Vec::new();
    report::print(&lines, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "first\nsecond\n");
}

#[test]
fn test_system_clock_report_shape() {
    let lines = report::build(&Calendar::system(), &ReportOptions::default()).unwrap();
    assert_eq!(lines.len(), 23);
    assert!(lines[0].starts_with("Current Date and Time: "));
    assert_eq!(lines[4], "--- Play Field ---");
    assert!(lines[9].ends_with("[UTC]"));
}
