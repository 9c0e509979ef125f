//! datewalk - a small calendar and time-arithmetic utility
//!
//! This library wraps chrono behind a narrow, immutable API: current date and
//! time through an injectable clock, date construction, day/week/month
//! arithmetic, comparison, and interval measurement in calendar or clock
//! units. The binary prints a demonstration report built on top of it.
//!
//! # Modules
//!
//! * [`calendar`] - Temporal value types, clock capability and operations
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`report`] - The demonstration report
//! * [`utils`] - Rendering formats and helpers

/// Calendar/time utility: values, clock, arithmetic, comparison, intervals
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for stderr and optional file output
pub mod logger;

/// Demonstration report construction and printing
pub mod report;

/// Utility functions for date/time rendering
pub mod utils;

pub use calendar::{
    add_days, add_months, add_seconds, add_weeks, compare, difference, duration_minutes, make_date, Calendar,
    CalendarArithmetic, CalendarDate, CalendarError, Clock, ClockDateTime, Comparison, FixedClock, Instant,
    SystemClock, Temporal, TimeOfDay, Unit, ZonedInstant,
};
