//! Calendar and time-arithmetic utility.
//!
//! Value types are immutable; every operation returns a new value. The only
//! fallible operations are construction from raw parts and zone lookup.

pub mod arithmetic;
pub mod clock;
pub mod compare;
pub mod error;
pub mod interval;
pub mod types;

pub use arithmetic::{add_days, add_months, add_seconds, add_weeks, CalendarArithmetic};
pub use clock::{Calendar, Clock, FixedClock, SystemClock};
pub use compare::{compare, Comparison};
pub use error::CalendarError;
pub use interval::{difference, duration_minutes, Temporal, Unit};
pub use types::{make_date, parse_zone, CalendarDate, ClockDateTime, Instant, TimeOfDay, ZonedInstant};
