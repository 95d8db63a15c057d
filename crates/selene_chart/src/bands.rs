//! Grouping of sampled moments into phase bands.
//!
//! A charting host calls the calculator once per bar and draws one filled
//! band per run of equal phases. The tracker holds that bookkeeping: a new
//! band starts when a sample's phase differs from the previous sample's,
//! otherwise the current band is stretched to the new sample's time.

use selene_phase::{Phase, PhaseResult, try_calculate};
use selene_time::UtcTime;
use tracing::{debug, trace};

use crate::config::{ChartConfig, MAX_SAMPLES};
use crate::error::ChartError;
use crate::palette::Rgba;

/// A run of consecutive samples sharing one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseBand {
    /// Host object id, `moon_phase_{start_index}`.
    pub id: String,
    /// Index of the sample that started the band.
    pub start_index: usize,
    pub phase: Phase,
    pub symbol: &'static str,
    pub color: Rgba,
    /// Time of the first sample.
    pub start: UtcTime,
    /// Time of the latest sample.
    pub end: UtcTime,
    /// Number of samples in the band.
    pub samples: usize,
}

/// What a pushed sample did to the band list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandUpdate {
    /// A new band was opened at this position in [`PhaseBandTracker::bands`].
    Started(usize),
    /// The band at this position was extended.
    Extended(usize),
}

/// Whether two samples belong to the same band.
///
/// Phase equality is the enum form of a case-insensitive name comparison.
pub fn same_band(previous: &PhaseResult, current: &PhaseResult) -> bool {
    previous.phase == current.phase
}

/// Incremental band builder for one sample series.
#[derive(Debug, Clone)]
pub struct PhaseBandTracker {
    config: ChartConfig,
    bands: Vec<PhaseBand>,
    last: Option<PhaseResult>,
}

impl PhaseBandTracker {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            bands: Vec::new(),
            last: None,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Compute the phase for one sample and fold it into the bands.
    pub fn push(&mut self, index: usize, moment: &UtcTime) -> Result<BandUpdate, ChartError> {
        let result = try_calculate(moment, self.config.hemisphere)?;
        Ok(self.push_result(index, result))
    }

    /// Fold an already computed phase into the bands.
    pub fn push_result(&mut self, index: usize, result: PhaseResult) -> BandUpdate {
        let continues = match (&self.last, self.bands.last_mut()) {
            (Some(prev), Some(band)) if same_band(prev, &result) => {
                band.end = result.moment;
                band.samples += 1;
                true
            }
            _ => false,
        };

        let update = if continues {
            let pos = self.bands.len() - 1;
            trace!(pos, end = %result.moment, "phase band extended");
            BandUpdate::Extended(pos)
        } else {
            let band = PhaseBand {
                id: format!("moon_phase_{index}"),
                start_index: index,
                phase: result.phase,
                symbol: result.symbol,
                color: self.config.palette.color_for(result.phase),
                start: result.moment,
                end: result.moment,
                samples: 1,
            };
            debug!(
                id = %band.id,
                phase = %band.phase,
                start = %band.start,
                "phase band started"
            );
            self.bands.push(band);
            BandUpdate::Started(self.bands.len() - 1)
        };

        self.last = Some(result);
        update
    }

    /// Phase of the most recent sample.
    pub fn last_phase(&self) -> Option<&PhaseResult> {
        self.last.as_ref()
    }

    pub fn bands(&self) -> &[PhaseBand] {
        &self.bands
    }

    pub fn into_bands(self) -> Vec<PhaseBand> {
        self.bands
    }
}

/// Sample `[start, end]` every `step_hours` and return the phase bands.
pub fn sample_bands(
    config: ChartConfig,
    start: &UtcTime,
    end: &UtcTime,
    step_hours: f64,
) -> Result<Vec<PhaseBand>, ChartError> {
    if !(step_hours.is_finite() && step_hours > 0.0) {
        return Err(ChartError::InvalidSampling("step must be positive"));
    }
    let start_jd = start.to_jd();
    let end_jd = end.to_jd();
    if !(end_jd >= start_jd) {
        return Err(ChartError::InvalidSampling("end precedes start"));
    }

    let step_days = step_hours / 24.0;
    let count = ((end_jd - start_jd) / step_days).floor() + 1.0;
    if count > MAX_SAMPLES as f64 {
        return Err(ChartError::InvalidSampling("too many samples"));
    }

    let mut tracker = PhaseBandTracker::new(config);
    for i in 0..count as usize {
        let moment = UtcTime::from_jd(start_jd + i as f64 * step_days);
        tracker.push(i, &moment)?;
    }
    Ok(tracker.into_bands())
}

#[cfg(test)]
mod tests {
    use selene_phase::{CYCLE_LENGTH_DAYS, Hemisphere, REFERENCE_NEW_MOON};

    use super::*;

    #[test]
    fn consecutive_new_moons_share_one_band() {
        let mut tracker = PhaseBandTracker::new(ChartConfig::default());
        let a = tracker.push(0, &REFERENCE_NEW_MOON).unwrap();
        let b = tracker.push(1, &REFERENCE_NEW_MOON.add_hours(6.0)).unwrap();
        assert_eq!(a, BandUpdate::Started(0));
        assert_eq!(b, BandUpdate::Extended(0));
        assert_eq!(tracker.bands().len(), 1);
        let band = &tracker.bands()[0];
        assert_eq!(band.phase, Phase::NewMoon);
        assert_eq!(band.samples, 2);
        assert_eq!(band.end, REFERENCE_NEW_MOON.add_hours(6.0));
        assert_eq!(band.id, "moon_phase_0");
    }

    #[test]
    fn phase_change_starts_new_band() {
        let mut tracker = PhaseBandTracker::new(ChartConfig::default());
        tracker.push(0, &REFERENCE_NEW_MOON).unwrap();
        let update = tracker.push(7, &REFERENCE_NEW_MOON.add_days(5.0)).unwrap();
        assert_eq!(update, BandUpdate::Started(1));
        let band = &tracker.bands()[1];
        assert_eq!(band.phase, Phase::WaxingCrescent);
        assert_eq!(band.id, "moon_phase_7");
        assert_eq!(band.start_index, 7);
    }

    #[test]
    fn band_color_follows_palette() {
        let config = ChartConfig::default();
        let mut tracker = PhaseBandTracker::new(config);
        tracker.push(0, &REFERENCE_NEW_MOON).unwrap();
        assert_eq!(
            tracker.bands()[0].color,
            config.palette.color_for(Phase::NewMoon)
        );
    }

    #[test]
    fn configured_hemisphere_used() {
        let config = ChartConfig::for_hemisphere(Hemisphere::Southern);
        let mut tracker = PhaseBandTracker::new(config);
        tracker.push(0, &REFERENCE_NEW_MOON.add_days(5.0)).unwrap();
        assert_eq!(tracker.bands()[0].symbol, "🌘");
        assert_eq!(
            tracker.last_phase().map(|r| r.hemisphere),
            Some(Hemisphere::Southern)
        );
    }

    #[test]
    fn hourly_cycle_yields_eight_bands() {
        let start = REFERENCE_NEW_MOON;
        let end = start.add_days(CYCLE_LENGTH_DAYS - 0.5);
        let bands = sample_bands(ChartConfig::default(), &start, &end, 1.0).unwrap();
        assert_eq!(bands.len(), 8);
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.phase.index() as usize, i);
        }
        let total: usize = bands.iter().map(|b| b.samples).sum();
        assert_eq!(total, ((CYCLE_LENGTH_DAYS - 0.5) * 24.0).floor() as usize + 1);
    }

    #[test]
    fn single_point_range() {
        let bands =
            sample_bands(ChartConfig::default(), &REFERENCE_NEW_MOON, &REFERENCE_NEW_MOON, 1.0)
                .unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].samples, 1);
    }

    #[test]
    fn invalid_sampling_rejected() {
        let s = REFERENCE_NEW_MOON;
        let e = s.add_days(1.0);
        let cfg = ChartConfig::default();
        assert_eq!(
            sample_bands(cfg, &s, &e, 0.0),
            Err(ChartError::InvalidSampling("step must be positive"))
        );
        assert_eq!(
            sample_bands(cfg, &e, &s, 1.0),
            Err(ChartError::InvalidSampling("end precedes start"))
        );
        assert_eq!(
            sample_bands(cfg, &s, &s.add_days(100_000.0), 0.001),
            Err(ChartError::InvalidSampling("too many samples"))
        );
    }
}
