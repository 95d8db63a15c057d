//! UTC calendar time for the selene moon-phase calculator.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - `UtcTime`, a plain UTC calendar moment with ISO-8601 parsing and display
//! - A system clock adapter (`UtcTime::now`)

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    unix_seconds_to_jd,
};
pub use utc_time::UtcTime;
