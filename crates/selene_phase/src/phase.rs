//! The eight named phases of the synodic cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::PhaseError;

/// The 8 phases starting from New Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

/// All 8 phases in cycle order (0 = New Moon, 7 = Waning Crescent).
pub const ALL_PHASES: [Phase; 8] = [
    Phase::NewMoon,
    Phase::WaxingCrescent,
    Phase::FirstQuarter,
    Phase::WaxingGibbous,
    Phase::FullMoon,
    Phase::WaningGibbous,
    Phase::ThirdQuarter,
    Phase::WaningCrescent,
];

impl Phase {
    /// Canonical English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::ThirdQuarter => "Third Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// 0-based index (NewMoon=0 .. WaningCrescent=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::ThirdQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Phase at a 0-based index, `None` past 7.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_PHASES.len() {
            Some(ALL_PHASES[index as usize])
        } else {
            None
        }
    }

    /// True for the three phases between New Moon and Full Moon.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// True for the three phases between Full Moon and the next New Moon.
    pub const fn is_waning(self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::ThirdQuarter | Self::WaningCrescent
        )
    }

    /// All 8 phases in order.
    pub const fn all() -> &'static [Phase; 8] {
        &ALL_PHASES
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = PhaseError;

    /// Case-insensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_PHASES
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PhaseError::UnrecognizedPhaseName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PHASES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(Phase::from_index(i as u8), Some(*p));
        }
        assert_eq!(Phase::from_index(8), None);
    }

    #[test]
    fn names_unique() {
        for (i, a) in ALL_PHASES.iter().enumerate() {
            for b in &ALL_PHASES[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("full moon".parse::<Phase>(), Ok(Phase::FullMoon));
        assert_eq!("WANING CRESCENT".parse::<Phase>(), Ok(Phase::WaningCrescent));
        assert_eq!(" New Moon ".parse::<Phase>(), Ok(Phase::NewMoon));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "Blue Moon".parse::<Phase>(),
            Err(PhaseError::UnrecognizedPhaseName("Blue Moon".to_string()))
        );
        // Last quarter is a common synonym, but not one of the canonical names.
        assert!("Last Quarter".parse::<Phase>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for p in Phase::all() {
            assert_eq!(p.to_string(), p.name());
            assert_eq!(p.to_string().parse::<Phase>(), Ok(*p));
        }
    }

    #[test]
    fn waxing_and_waning_partition() {
        let waxing = ALL_PHASES.iter().filter(|p| p.is_waxing()).count();
        let waning = ALL_PHASES.iter().filter(|p| p.is_waning()).count();
        assert_eq!(waxing, 3);
        assert_eq!(waning, 3);
        assert!(!Phase::NewMoon.is_waxing() && !Phase::NewMoon.is_waning());
        assert!(!Phase::FullMoon.is_waxing() && !Phase::FullMoon.is_waning());
    }
}
