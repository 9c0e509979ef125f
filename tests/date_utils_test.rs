use chrono::{NaiveDate, TimeZone, Utc};
use datewalk::utils::datetime::*;

#[test]
fn test_format_date() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_date(date), "2023-12-25");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2025-01-15").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    assert!(parse_date("15/01/2025").is_err());
}

#[test]
fn test_format_datetime_fraction_digits() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_datetime(date.and_hms_opt(14, 30, 0).unwrap()), "2025-01-15T14:30:00");
    assert_eq!(
        format_datetime(date.and_hms_micro_opt(14, 30, 0, 120).unwrap()),
        "2025-01-15T14:30:00.000120"
    );
    assert_eq!(
        format_datetime(date.and_hms_nano_opt(14, 30, 0, 1).unwrap()),
        "2025-01-15T14:30:00.000000001"
    );
}

#[test]
fn test_format_instant() {
    let instant = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    assert_eq!(format_instant(instant), "2025-01-15T14:30:00Z");
}

#[test]
fn test_format_offset() {
    assert_eq!(format_offset(0), "Z");
    assert_eq!(format_offset(3600), "+01:00");
    assert_eq!(format_offset(-9000), "-02:30");
    assert_eq!(format_offset(20_745), "+05:45:45");
}

#[test]
fn test_format_zoned() {
    let tokyo = chrono_tz::Asia::Tokyo.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
    assert_eq!(format_zoned(&tokyo), "2025-01-15T09:00:00+09:00[Asia/Tokyo]");
}

#[test]
fn test_format_today_matches_date_format() {
    let today = format_today();
    assert!(parse_date(&today).is_ok());
}
