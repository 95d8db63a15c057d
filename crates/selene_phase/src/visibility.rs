//! Triangular illumination model.
//!
//! Visibility rises linearly from 0 % at new moon to 100 % around day 15 and
//! falls back linearly afterwards. It is a display approximation, not a
//! photometric one.
//!
//! The turning point `FULL_MOON_DAY` is the fixed day 15, while the ramp is
//! scaled by half the cycle (14.765 days). Values in `(14.765, 15]` would
//! overshoot 100 and are clamped.

use crate::boundary::CYCLE_LENGTH_DAYS;

/// Day of the cycle after which the model counts down.
pub const FULL_MOON_DAY: f64 = 15.0;

/// Half the synodic cycle, in days.
pub const HALF_CYCLE_DAYS: f64 = CYCLE_LENGTH_DAYS / 2.0;

/// Visibility percentage in `[0, 100]` for a days-into-cycle offset.
///
/// A full cycle is the next new moon. Reported offsets round up to 29.53 in
/// the last minutes of a cycle and give 0.
pub fn visibility(days_into_cycle: f64) -> f64 {
    if days_into_cycle >= CYCLE_LENGTH_DAYS {
        return 0.0;
    }
    let numerator = if days_into_cycle > FULL_MOON_DAY {
        HALF_CYCLE_DAYS - (days_into_cycle % HALF_CYCLE_DAYS)
    } else {
        days_into_cycle
    };
    (numerator / HALF_CYCLE_DAYS * 100.0).clamp(0.0, 100.0)
}
