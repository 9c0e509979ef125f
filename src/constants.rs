//! Constants used throughout the application
//!
//! This module centralizes report labels, file names and default values
//! to improve maintainability and consistency.

// Report labels
pub const LABEL_CURRENT_DATE_TIME: &str = "Current Date and Time";
pub const LABEL_DATE_IN_TWO_WEEKS: &str = "Date in 2 Weeks";
pub const LABEL_CURRENT_DATE_IS: &str = "Current date is";
pub const LABEL_FUTURE_DATE: &str = "the specified future date";
pub const LABEL_DAYS_BETWEEN: &str = "Difference in days between";
pub const LABEL_PLAY_FIELD: &str = "--- Play Field ---";
pub const LABEL_TODAY: &str = "Today";
pub const LABEL_TOMORROW: &str = "Tomorrow";
pub const LABEL_YESTERDAY: &str = "Yesterday";
pub const LABEL_IS_BEFORE: &str = "Is date3 before date4?";
pub const LABEL_IS_AFTER: &str = "Is date3 after date4?";
pub const LABEL_IS_EQUAL: &str = "Are both dates equal?";
pub const LABEL_NOW: &str = "Now";
pub const LABEL_NEXT_WEEK: &str = "Next Week";
pub const LABEL_LAST_MONTH: &str = "Last Month";
pub const LABEL_DURATION_MINUTES: &str = "Duration in minutes";
pub const LABEL_YEARS: &str = "Years";
pub const LABEL_MONTHS: &str = "Months";
pub const LABEL_WEEKS: &str = "Weeks";
pub const LABEL_DAYS: &str = "Days";
pub const LABEL_SECONDS_DIFFERENCE: &str = "Seconds Difference";
pub const LABEL_NANOS_DIFFERENCE: &str = "Nanoseconds Difference";

// Config
pub const APP_DIR_NAME: &str = "datewalk";
pub const CONFIG_FILE_NAME: &str = "datewalk.toml";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_IGNORED: &str = "Using default configuration";

/// Zone used for the zoned-instant line when none is configured
pub const DEFAULT_ZONE: &str = "UTC";
/// Log level used when logging is enabled without an explicit level
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Timestamp prefix for log records
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
