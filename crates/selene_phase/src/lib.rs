//! Moon phase from a UTC moment using a mean synodic month.
//!
//! This crate provides:
//! - The 8 named phases and the per-hemisphere glyph tables
//! - A process-wide boundary table cutting the 29.53-day cycle into 8 segments
//! - `calculate` / `try_calculate`, anchored to the 1920-Jan-21 new moon
//! - A triangular visibility (illumination) approximation
//!
//! The model is a linear cycle count, not an ephemeris. It is accurate to a
//! fraction of a day around the 20th and 21st centuries and degrades with
//! distance from the reference new moon.

pub mod boundary;
pub mod calculator;
pub mod error;
pub mod hemisphere;
pub mod phase;
pub mod visibility;

pub use boundary::{
    CYCLE_LENGTH_DAYS, PHASE_COUNT, PHASE_PERIOD_DAYS, PhaseBoundaryTable, PhaseSegment,
    boundary_table,
};
pub use calculator::{
    PhaseResult, REFERENCE_NEW_MOON, calculate, days_into_cycle_at_jd, now, try_calculate,
    utc_now,
};
pub use error::PhaseError;
pub use hemisphere::{Hemisphere, NORTHERN_SYMBOLS, SOUTHERN_SYMBOLS};
pub use phase::{ALL_PHASES, Phase};
pub use visibility::{FULL_MOON_DAY, HALF_CYCLE_DAYS, visibility};

// Re-export so callers don't need to depend on selene_time directly.
pub use selene_time::UtcTime;
