//! Clock capability and the "now" family of operations.
//!
//! Nothing in the calendar reads the host clock directly. A [`Calendar`] is
//! handed a [`Clock`] and every "now" call asks it afresh, so tests can swap
//! in a [`FixedClock`] and get deterministic output.

use super::error::CalendarError;
use super::types::{parse_zone, CalendarDate, ClockDateTime, Instant, ZonedInstant};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current wall time together with the host's local UTC offset
    fn now(&self) -> DateTime<FixedOffset>;

    /// Short identifier used in log output
    fn name(&self) -> &str {
        "clock"
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Reads the host clock in the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Always returns the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// A clock frozen at `instant`, reporting `offset` as the local zone
    pub fn at_instant(instant: Instant, offset: FixedOffset) -> Self {
        Self {
            at: instant.as_utc().with_timezone(&offset),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Entry point for time-dependent operations.
#[derive(Debug, Clone)]
pub struct Calendar<C = SystemClock> {
    clock: C,
}

impl Calendar<SystemClock> {
    /// Calendar backed by the host clock
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Calendar<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current date in the clock's local zone
    pub fn now_date(&self) -> CalendarDate {
        self.now_datetime().date()
    }

    /// Current local date and time
    pub fn now_datetime(&self) -> ClockDateTime {
        ClockDateTime::from(self.read().naive_local())
    }

    /// Current absolute timestamp
    pub fn now_instant(&self) -> Instant {
        Instant::from(self.read().with_timezone(&Utc))
    }

    /// Current instant rendered in the IANA zone `tz`.
    ///
    /// Fails with [`CalendarError::UnknownTimeZone`] for names outside the
    /// tz database. The zone is resolved before the clock is read.
    pub fn now_zoned(&self, tz: &str) -> Result<ZonedInstant, CalendarError> {
        let zone = parse_zone(tz)?;
        Ok(self.now_instant().in_zone(zone))
    }

    fn read(&self) -> DateTime<FixedOffset> {
        let now = self.clock.now();
        log::debug!("{} clock read: {}", self.clock.name(), now.to_rfc3339());
        now
    }
}
