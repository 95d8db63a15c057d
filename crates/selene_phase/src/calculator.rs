//! Moon phase for a UTC moment.
//!
//! The moment is converted to a Julian Date, the number of synodic cycles
//! since the reference new moon of 1920-Jan-21 05:25 UTC is counted, and the
//! fractional remainder is scaled back to days and looked up in the
//! [`PhaseBoundaryTable`].
//!
//! Cycles are counted linearly with a fixed 29.53-day month, so error grows
//! with distance from 1920. Moments before 1920 are computed the same way
//! but are not reliable.
//!
//! Source: subsystems.us "Calculate the Moon Phase" worksheet; reference
//! new moon from timeanddate.com (London, January 1920).

use selene_time::UtcTime;

use crate::boundary::{CYCLE_LENGTH_DAYS, PhaseBoundaryTable};
use crate::error::PhaseError;
use crate::hemisphere::Hemisphere;
use crate::phase::Phase;
use crate::visibility::visibility;

/// The new moon every cycle count is anchored to.
pub const REFERENCE_NEW_MOON: UtcTime = UtcTime::new(1920, 1, 21, 5, 25, 0.0);

/// Phase of the moon at one moment, as seen from one hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseResult {
    /// The phase.
    pub phase: Phase,
    /// 0-based index of the matched boundary segment (equals `phase.index()`).
    pub segment_index: u8,
    /// Phase glyph for the observing hemisphere.
    pub symbol: &'static str,
    /// Days into the current cycle, rounded to 2 decimals, in `[0, 29.53]`.
    pub days_into_cycle: f64,
    /// Hemisphere the glyph was chosen for.
    pub hemisphere: Hemisphere,
    /// The moment the phase was computed for.
    pub moment: UtcTime,
}

impl PhaseResult {
    /// Canonical phase name.
    pub const fn name(&self) -> &'static str {
        self.phase.name()
    }

    /// Approximate illuminated percentage in `[0, 100]`.
    pub fn visibility(&self) -> f64 {
        visibility(self.days_into_cycle)
    }
}

/// Unrounded days into the current cycle for a Julian Date (UTC).
///
/// Always in `[0, CYCLE_LENGTH_DAYS]` for finite input, including dates
/// before the reference new moon.
pub fn days_into_cycle_at_jd(jd: f64) -> f64 {
    let cycles = (jd - REFERENCE_NEW_MOON.to_jd()) / CYCLE_LENGTH_DAYS;
    (cycles - cycles.floor()) * CYCLE_LENGTH_DAYS
}

/// Compute the phase at `moment`.
///
/// Returns [`PhaseError::InvariantViolation`] if the cycle offset falls
/// outside every segment, which only happens for non-finite input.
pub fn try_calculate(
    moment: &UtcTime,
    hemisphere: Hemisphere,
) -> Result<PhaseResult, PhaseError> {
    let days = days_into_cycle_at_jd(moment.to_jd());

    // Look up with the unrounded offset; only the reported field is rounded.
    let (index, segment) = PhaseBoundaryTable::get()
        .find(days)
        .ok_or(PhaseError::InvariantViolation {
            days_into_cycle: days,
        })?;

    Ok(PhaseResult {
        phase: segment.phase,
        segment_index: index as u8,
        symbol: hemisphere.symbol(index),
        days_into_cycle: round2(days),
        hemisphere,
        moment: *moment,
    })
}

/// Compute the phase at `moment`.
///
/// # Panics
///
/// Panics when no phase segment matches, see [`try_calculate`].
pub fn calculate(moment: &UtcTime, hemisphere: Hemisphere) -> PhaseResult {
    try_calculate(moment, hemisphere).unwrap_or_else(|e| panic!("{e} at {moment}"))
}

/// Phase right now, reading the system clock.
pub fn utc_now(hemisphere: Hemisphere) -> Result<PhaseResult, PhaseError> {
    let now = UtcTime::now()?;
    try_calculate(&now, hemisphere)
}

/// Phase right now.
///
/// The system clock is already UTC, so this is the same instant as
/// [`utc_now`]; both are kept for callers that think in local time.
pub fn now(hemisphere: Hemisphere) -> Result<PhaseResult, PhaseError> {
    utc_now(hemisphere)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
