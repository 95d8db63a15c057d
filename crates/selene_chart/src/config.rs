//! Configuration for phase band sampling.

use selene_phase::Hemisphere;

use crate::palette::PhasePalette;

/// Upper bound on samples produced by one [`crate::sample_bands`] call.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Configuration for a chart-side phase consumer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartConfig {
    /// Hemisphere passed to every phase calculation.
    pub hemisphere: Hemisphere,
    /// Colour per phase.
    pub palette: PhasePalette,
}

impl ChartConfig {
    pub fn new(hemisphere: Hemisphere, palette: PhasePalette) -> Self {
        Self {
            hemisphere,
            palette,
        }
    }

    /// Default palette, given hemisphere.
    pub fn for_hemisphere(hemisphere: Hemisphere) -> Self {
        Self {
            hemisphere,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_northern_with_default_palette() {
        let c = ChartConfig::default();
        assert_eq!(c.hemisphere, Hemisphere::Northern);
        assert_eq!(c.palette, PhasePalette::default());
    }

    #[test]
    fn for_hemisphere_keeps_palette() {
        let c = ChartConfig::for_hemisphere(Hemisphere::Southern);
        assert_eq!(c.hemisphere, Hemisphere::Southern);
        assert_eq!(c.palette.alpha, crate::palette::DEFAULT_ALPHA);
    }
}
