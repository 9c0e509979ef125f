//! Date and time rendering
//!
//! Every temporal value in this crate renders through the formats below, so
//! output is identical regardless of the host's locale settings. Seconds are
//! always shown; the fraction uses the fewest of 0, 3, 6 or 9 digits that
//! represent the value exactly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Offset, Utc};

/// Calendar date, e.g. `2024-12-25`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time of day, e.g. `10:00:00` or `09:30:00.250`
pub const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Local date-time, e.g. `2026-10-17T09:30:00`
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// UTC instant, e.g. `2026-10-17T07:30:00Z`
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format a NaiveDateTime in ISO-8601 local form
///
/// # Arguments
/// * `dt` - Date-time without a zone
///
/// # Returns
/// * `String` - e.g. `2025-01-15T14:30:00`, with a fraction only when non-zero
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Format a UTC instant with a trailing `Z`
///
/// # Arguments
/// * `instant` - Absolute timestamp
///
/// # Returns
/// * `String` - e.g. `2025-01-15T14:30:00Z`
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

/// Render a UTC offset: `Z` for zero, otherwise `+HH:MM` (or `+HH:MM:SS`
/// when the offset has a seconds component).
pub fn format_offset(seconds_east: i32) -> String {
    if seconds_east == 0 {
        return "Z".to_string();
    }

    let sign = if seconds_east < 0 { '-' } else { '+' };
    let total = seconds_east.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);

    if seconds == 0 {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

/// Render a zoned date-time as local time, offset and bracketed zone name,
/// e.g. `2026-10-17T09:30:00+02:00[Europe/Paris]`.
pub fn format_zoned(dt: &DateTime<chrono_tz::Tz>) -> String {
    let offset = dt.offset().fix().local_minus_utc();
    format!(
        "{}{}[{}]",
        dt.format(DATETIME_FORMAT),
        format_offset(offset),
        dt.timezone().name()
    )
}

/// Current local date, as a plain string
pub fn format_today() -> String {
    format_date(chrono::Local::now().date_naive())
}
