//! Error type for calendar construction and lookups.

/// Errors produced by the calendar utility.
///
/// Arithmetic and comparison on already-valid values never fail; only
/// building a value from raw parts (or resolving a zone name) can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("Invalid instant: {seconds}s + {nanos}ns from the Unix epoch")]
    InvalidInstant { seconds: i64, nanos: u32 },

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Parse error: {0}")]
    Parse(#[from] chrono::ParseError),
}
