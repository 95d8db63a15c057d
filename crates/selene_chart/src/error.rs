//! Error types for chart-side phase consumption.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_phase::PhaseError;
use selene_time::TimeError;

/// Errors from palette parsing and band sampling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the phase calculator or a phase-name lookup.
    Phase(PhaseError),
    /// Error from time parsing.
    Time(TimeError),
    /// A colour string that is neither `#rrggbb`, `#aarrggbb` nor a known name.
    InvalidColor(String),
    /// Invalid sampling range or step.
    InvalidSampling(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phase(e) => write!(f, "phase error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid colour: {s:?}"),
            Self::InvalidSampling(msg) => write!(f, "invalid sampling: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<PhaseError> for ChartError {
    fn from(e: PhaseError) -> Self {
        Self::Phase(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
