//! Interval measurement between two temporal points.
//!
//! Calendar units (days, weeks, months, years) follow calendar rules: a month
//! has elapsed once the same day of month is reached, whatever its length in
//! seconds. Clock units (seconds, nanoseconds) count exact elapsed time.
//! Every count is truncated toward zero and is anti-symmetric:
//! `difference(a, b, u) == -difference(b, a, u)`.

use super::types::{CalendarDate, ClockDateTime, Instant, TimeOfDay};
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Unit in which an interval is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Nanoseconds,
    Seconds,
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {
    /// Whether the unit is counted by calendar rules rather than elapsed time
    pub fn is_calendar_based(self) -> bool {
        matches!(self, Unit::Days | Unit::Weeks | Unit::Months | Unit::Years)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Nanoseconds => "nanoseconds",
            Unit::Seconds => "seconds",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
        };
        f.write_str(name)
    }
}

/// A point in time that can be measured against another of its kind.
pub trait Temporal: Copy + Ord {
    /// Signed count of whole `unit`s from `self` to `end`; negative when
    /// `self` is after `end`.
    fn until(self, end: Self, unit: Unit) -> i64;
}

impl Temporal for CalendarDate {
    fn until(self, end: Self, unit: Unit) -> i64 {
        if unit.is_calendar_based() {
            between_dates(self.as_naive(), end.as_naive(), unit)
        } else {
            self.at_midnight().until(end.at_midnight(), unit)
        }
    }
}

impl Temporal for ClockDateTime {
    fn until(self, end: Self, unit: Unit) -> i64 {
        if end < self {
            return end.until(self, unit).saturating_neg();
        }

        if !unit.is_calendar_based() {
            return clock_units(end.as_naive() - self.as_naive(), unit);
        }

        // A day only counts once the end's time of day has caught up with the start's.
        let start = self.as_naive();
        let mut end_date = end.as_naive().date();
        if end_date > start.date() && end.as_naive().time() < start.time() {
            end_date = end_date.pred_opt().unwrap_or(end_date);
        }
        between_dates(start.date(), end_date, unit)
    }
}

impl Temporal for Instant {
    fn until(self, end: Self, unit: Unit) -> i64 {
        if unit.is_calendar_based() {
            self.to_utc_datetime().until(end.to_utc_datetime(), unit)
        } else {
            clock_units(end.as_utc() - self.as_utc(), unit)
        }
    }
}

/// Signed count of whole `unit`s from `a` to `b`.
pub fn difference<T: Temporal>(a: T, b: T, unit: Unit) -> i64 {
    a.until(b, unit)
}

/// Whole minutes from `start` to `end` on a shared day.
///
/// When `end` precedes `start` the result is negative; there is no wrap
/// into the next day.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    (end.as_naive() - start.as_naive()).num_minutes()
}

/// Calendar units between two dates. Clock units never reach here.
fn between_dates(start: NaiveDate, end: NaiveDate, unit: Unit) -> i64 {
    match unit {
        Unit::Weeks => (end - start).num_days() / 7,
        Unit::Months => months_between(start, end),
        Unit::Years => months_between(start, end) / 12,
        _ => (end - start).num_days(),
    }
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let month_index = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
    let months = month_index(end) - month_index(start);
    let day_delta = i64::from(end.day()) - i64::from(start.day());

    if months > 0 && day_delta < 0 {
        months - 1
    } else if months < 0 && day_delta > 0 {
        months + 1
    } else {
        months
    }
}

/// Exact elapsed time in a clock unit. Only called for non-calendar units.
fn clock_units(delta: TimeDelta, unit: Unit) -> i64 {
    if unit == Unit::Seconds {
        return delta.num_seconds();
    }
    let nanos = i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos());
    saturate(nanos)
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
