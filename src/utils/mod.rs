//! Utility modules shared across the crate.
//!
//! - [`datetime`] - Rendering formats and string conversion for temporal values

pub mod datetime;
