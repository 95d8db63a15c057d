//! Phase boundary table: the synodic cycle cut into 8 equal segments.
//!
//! Segment `i` covers `[i * P, (i + 1) * P]` days with `P = 29.53 / 8`.
//! Both ends are inclusive, so neighbouring segments share a boundary value.
//! Lookups scan forward and take the first hit, which assigns an exact
//! boundary to the earlier phase.

use std::sync::LazyLock;

use crate::phase::{ALL_PHASES, Phase};

/// Mean synodic month used by the model, in days.
pub const CYCLE_LENGTH_DAYS: f64 = 29.53;

/// Number of phase segments in one cycle.
pub const PHASE_COUNT: usize = ALL_PHASES.len();

/// Width of one phase segment, in days.
pub const PHASE_PERIOD_DAYS: f64 = CYCLE_LENGTH_DAYS / PHASE_COUNT as f64;

/// One phase and the days-into-cycle interval it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSegment {
    pub phase: Phase,
    /// Days into the cycle this phase starts.
    pub start: f64,
    /// Days into the cycle this phase ends.
    pub end: f64,
}

impl PhaseSegment {
    /// Canonical name of the segment's phase.
    pub const fn name(&self) -> &'static str {
        self.phase.name()
    }

    /// Whether `days` lies in `[start, end]`.
    pub fn contains(&self, days: f64) -> bool {
        days >= self.start && days <= self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// The ordered, read-only partition of the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseBoundaryTable {
    segments: [PhaseSegment; PHASE_COUNT],
}

static TABLE: LazyLock<PhaseBoundaryTable> = LazyLock::new(PhaseBoundaryTable::build);

impl PhaseBoundaryTable {
    fn build() -> Self {
        let segments = std::array::from_fn(|i| PhaseSegment {
            phase: ALL_PHASES[i],
            start: PHASE_PERIOD_DAYS * i as f64,
            end: PHASE_PERIOD_DAYS * (i + 1) as f64,
        });
        Self { segments }
    }

    /// The process-wide table, built on first access.
    pub fn get() -> &'static Self {
        &TABLE
    }

    pub fn segments(&self) -> &[PhaseSegment; PHASE_COUNT] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn period(&self) -> f64 {
        PHASE_PERIOD_DAYS
    }

    /// First segment containing `days`, with its index.
    ///
    /// `None` only when `days` is outside `[0, CYCLE_LENGTH_DAYS]` or NaN.
    pub fn find(&self, days: f64) -> Option<(usize, &PhaseSegment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, seg)| seg.contains(days))
    }

    /// Segment for a phase.
    pub fn segment(&self, phase: Phase) -> &PhaseSegment {
        &self.segments[phase.index() as usize]
    }
}

/// Shorthand for [`PhaseBoundaryTable::get`].
pub fn boundary_table() -> &'static PhaseBoundaryTable {
    PhaseBoundaryTable::get()
}
