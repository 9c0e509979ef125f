//! Immutable temporal value types.
//!
//! Each type is a thin `Copy` wrapper over the matching chrono type so the
//! calendar rules (leap years, month lengths, clamping) come from chrono while
//! construction errors and rendering stay under this crate's control.

use super::error::CalendarError;
use crate::utils::datetime;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A proleptic Gregorian (year, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date, failing with [`CalendarError::InvalidDate`] when the
    /// triple does not name a real calendar day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Midnight at the start of this date
    pub fn at_midnight(&self) -> ClockDateTime {
        ClockDateTime(self.0.and_time(NaiveTime::MIN))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&datetime::format_date(self.0))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(datetime::parse_date(s)?))
    }
}

/// A time of day with no date and no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, CalendarError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or(CalendarError::InvalidTime { hour, minute, second })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(datetime::TIME_FORMAT))
    }
}

/// A local ("naive") date and time of day, not attached to any zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockDateTime(NaiveDateTime);

impl ClockDateTime {
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self(date.0.and_time(time.0))
    }

    pub fn date(&self) -> CalendarDate {
        CalendarDate(self.0.date())
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay(self.0.time())
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for ClockDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for ClockDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&datetime::format_datetime(self.0))
    }
}

/// An absolute point on the timeline, stored as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Build an instant from an offset against the Unix epoch.
    ///
    /// `nanos` must be below one second; leap-second encodings are rejected.
    pub fn from_unix(seconds: i64, nanos: u32) -> Result<Self, CalendarError> {
        if nanos >= 1_000_000_000 {
            return Err(CalendarError::InvalidInstant { seconds, nanos });
        }
        DateTime::from_timestamp(seconds, nanos)
            .map(Self)
            .ok_or(CalendarError::InvalidInstant { seconds, nanos })
    }

    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    /// Shift by a signed number of seconds.
    ///
    /// # Panics
    /// When the result leaves chrono's representable range.
    pub fn add_seconds(self, seconds: i64) -> Self {
        Self(self.0 + TimeDelta::seconds(seconds))
    }

    /// The wall-clock reading of this instant in UTC
    pub fn to_utc_datetime(&self) -> ClockDateTime {
        ClockDateTime(self.0.naive_utc())
    }

    pub fn in_zone(self, zone: Tz) -> ZonedInstant {
        ZonedInstant(self.0.with_timezone(&zone))
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&datetime::format_instant(self.0))
    }
}

/// An instant paired with an IANA zone. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedInstant(DateTime<Tz>);

impl ZonedInstant {
    pub fn instant(&self) -> Instant {
        Instant(self.0.with_timezone(&Utc))
    }

    pub fn zone_name(&self) -> &'static str {
        self.0.timezone().name()
    }

    /// Wall-clock reading in this instant's zone
    pub fn local_datetime(&self) -> ClockDateTime {
        ClockDateTime(self.0.naive_local())
    }
}

impl fmt::Display for ZonedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&datetime::format_zoned(&self.0))
    }
}

/// Build a [`CalendarDate`], failing with [`CalendarError::InvalidDate`].
pub fn make_date(year: i32, month: u32, day: u32) -> Result<CalendarDate, CalendarError> {
    CalendarDate::new(year, month, day)
}

/// Resolve an IANA zone name such as `"UTC"` or `"Europe/Paris"`.
pub fn parse_zone(name: &str) -> Result<Tz, CalendarError> {
    name.parse::<Tz>().map_err(|_| CalendarError::UnknownTimeZone(name.to_string()))
}
