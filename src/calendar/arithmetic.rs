//! Day, week and month arithmetic.
//!
//! Month arithmetic clamps the day of month: adding one month to January 31
//! lands on the last day of February instead of spilling into March.
//!
//! Results outside chrono's representable range (roughly ±262,000 years)
//! panic, the same way chrono's own `+` operators do.

use super::types::{CalendarDate, ClockDateTime, Instant};
use chrono::{Days, Months, NaiveDate, NaiveDateTime};

/// Calendar-relative shifts shared by dates and local date-times.
pub trait CalendarArithmetic: Copy {
    /// Shift by a signed number of days
    fn add_days(self, days: i64) -> Self;

    /// Shift by a signed number of months, clamping the day of month
    fn add_months(self, months: i64) -> Self;

    fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks.saturating_mul(7))
    }
}

impl CalendarArithmetic for CalendarDate {
    fn add_days(self, days: i64) -> Self {
        CalendarDate::from(shift_days(self.as_naive(), days))
    }

    fn add_months(self, months: i64) -> Self {
        CalendarDate::from(shift_months(self.as_naive(), months))
    }
}

impl CalendarArithmetic for ClockDateTime {
    fn add_days(self, days: i64) -> Self {
        ClockDateTime::from(shift_days(self.as_naive(), days))
    }

    fn add_months(self, months: i64) -> Self {
        ClockDateTime::from(shift_months(self.as_naive(), months))
    }
}

/// Types chrono can shift by whole [`Days`] and [`Months`].
trait Shift:
    Sized
    + std::ops::Add<Days, Output = Self>
    + std::ops::Sub<Days, Output = Self>
    + std::ops::Add<Months, Output = Self>
    + std::ops::Sub<Months, Output = Self>
{
}

impl Shift for NaiveDate {}
impl Shift for NaiveDateTime {}

fn shift_days<T: Shift>(value: T, days: i64) -> T {
    let amount = Days::new(days.unsigned_abs());
    if days < 0 {
        value - amount
    } else {
        value + amount
    }
}

fn shift_months<T: Shift>(value: T, months: i64) -> T {
    // Anything past u32::MAX months is out of range regardless; let chrono panic on it.
    let amount = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    if months < 0 {
        value - amount
    } else {
        value + amount
    }
}

pub fn add_days<T: CalendarArithmetic>(value: T, days: i64) -> T {
    value.add_days(days)
}

pub fn add_weeks<T: CalendarArithmetic>(value: T, weeks: i64) -> T {
    value.add_weeks(weeks)
}

pub fn add_months<T: CalendarArithmetic>(value: T, months: i64) -> T {
    value.add_months(months)
}

pub fn add_seconds(instant: Instant, seconds: i64) -> Instant {
    instant.add_seconds(seconds)
}
