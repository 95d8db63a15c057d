//! Error types for UTC parsing and clock access.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from UTC parsing or reading the system clock.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A UTC string did not match `YYYY-MM-DD[Thh:mm:ss[Z]]`.
    InvalidFormat(String),
    /// A calendar field was outside its valid range.
    OutOfRange(&'static str),
    /// The system clock reports a time before 1970-01-01.
    ClockBeforeUnixEpoch,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "invalid UTC format: {msg}"),
            Self::OutOfRange(field) => write!(f, "{field} out of range"),
            Self::ClockBeforeUnixEpoch => write!(f, "system clock is before the Unix epoch"),
        }
    }
}

impl Error for TimeError {}
