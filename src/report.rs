//! The demonstration report.
//!
//! Builds the fixed sequence of labelled lines the binary prints. Each "now"
//! value reads the clock afresh, so lines built against a live clock may
//! reflect slightly different moments.

use crate::calendar::{
    compare, difference, duration_minutes, make_date, Calendar, CalendarArithmetic, CalendarError, Clock,
    Comparison, TimeOfDay, Unit,
};
use crate::config::DisplayConfig;
use crate::constants::*;
use std::io::{self, Write};

/// Knobs for the ambient parts of the report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Zone the zoned-instant line is rendered in
    pub zone: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            zone: DEFAULT_ZONE.to_string(),
        }
    }
}

impl From<&DisplayConfig> for ReportOptions {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            zone: display.zone.clone(),
        }
    }
}

/// Build every report line against `calendar`'s clock.
pub fn build<C: Clock>(calendar: &Calendar<C>, options: &ReportOptions) -> Result<Vec<String>, CalendarError> {
    let mut lines = Vec::new();

    lines.push(format!("{}: {}", LABEL_CURRENT_DATE_TIME, calendar.now_datetime()));

    let current_date = calendar.now_date();
    lines.push(format!("{}: {}", LABEL_DATE_IN_TWO_WEEKS, current_date.add_weeks(2)));

    let future_date = make_date(2024, 12, 25)?;
    let relation = match compare(&current_date, &future_date) {
        Comparison::Before => "BEFORE",
        Comparison::After => "AFTER",
        Comparison::Equal => "EQUAL to",
    };
    lines.push(format!("{} {} {}: {}", LABEL_CURRENT_DATE_IS, relation, LABEL_FUTURE_DATE, future_date));

    let date1 = make_date(2023, 10, 1)?;
    let date2 = make_date(2025, 10, 1)?;
    let days_between = difference(date1, date2, Unit::Days);
    lines.push(format!("{} {} and {}: {} {}", LABEL_DAYS_BETWEEN, date1, date2, days_between, Unit::Days));

    lines.push(LABEL_PLAY_FIELD.to_string());

    let today = calendar.now_date();
    lines.push(format!("{}: {}", LABEL_TODAY, today));
    lines.push(format!("{}: {}", LABEL_TOMORROW, today.add_days(1)));
    lines.push(format!("{}: {}", LABEL_YESTERDAY, today.add_days(-1)));

    lines.push(calendar.now_instant().to_string());
    lines.push(calendar.now_zoned(&options.zone)?.to_string());

    let date3 = make_date(2022, 5, 20)?;
    let date4 = make_date(2023, 5, 20)?;
    let relation = compare(&date3, &date4);
    lines.push(format!("{} {}", LABEL_IS_BEFORE, relation.is_before()));
    lines.push(format!("{} {}", LABEL_IS_AFTER, relation.is_after()));
    lines.push(format!("{} {}", LABEL_IS_EQUAL, relation.is_equal()));

    let now = calendar.now_datetime();
    lines.push(format!("{}: {}", LABEL_NOW, now));
    lines.push(format!("{}: {}", LABEL_NEXT_WEEK, now.add_weeks(1)));
    lines.push(format!("{}: {}", LABEL_LAST_MONTH, now.add_months(-1)));

    let start_time = TimeOfDay::new(10, 0, 0)?;
    let end_time = TimeOfDay::new(12, 30, 0)?;
    lines.push(format!("{}: {}", LABEL_DURATION_MINUTES, duration_minutes(start_time, end_time)));

    let date5 = make_date(2020, 1, 1)?;
    let date6 = make_date(2023, 6, 15)?;
    for (label, unit) in [
        (LABEL_YEARS, Unit::Years),
        (LABEL_MONTHS, Unit::Months),
        (LABEL_WEEKS, Unit::Weeks),
        (LABEL_DAYS, Unit::Days),
    ] {
        lines.push(format!("{}: {}", label, difference(date5, date6, unit)));
    }

    let time1 = calendar.now_instant();
    let time2 = time1.add_seconds(5000);
    lines.push(format!("{}: {}", LABEL_SECONDS_DIFFERENCE, difference(time1, time2, Unit::Seconds)));
    lines.push(format!("{}: {}", LABEL_NANOS_DIFFERENCE, difference(time1, time2, Unit::Nanoseconds)));

    log::debug!("Built report with {} lines", lines.len());
    Ok(lines)
}

/// Write each line, newline-terminated.
pub fn print<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
