//! Error types for phase calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_time::TimeError;

/// Errors from the phase calculator and phase-name lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PhaseError {
    /// No boundary segment matched the computed cycle offset. Only reachable
    /// with non-finite input; the table itself always covers the cycle.
    InvariantViolation { days_into_cycle: f64 },
    /// A phase name outside the closed set of eight.
    UnrecognizedPhaseName(String),
    /// Error reading or parsing a moment.
    Time(TimeError),
}

impl Display for PhaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvariantViolation { days_into_cycle } => write!(
                f,
                "invariant violation: no phase segment contains {days_into_cycle} days"
            ),
            Self::UnrecognizedPhaseName(name) => write!(f, "unrecognized phase name: {name:?}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PhaseError {}

impl From<TimeError> for PhaseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
