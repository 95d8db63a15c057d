//! Phase → colour binding.
//!
//! Every phase has its own base colour; a single alpha is shared by all
//! eight so bands drawn over price data stay equally translucent.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use selene_phase::Phase;

use crate::error::ChartError;

/// Default alpha applied to every phase colour.
pub const DEFAULT_ALPHA: u8 = 100;

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#aarrggbb` hex form.
    pub fn to_hex_argb(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

/// Named colours accepted besides hex.
const NAMED_COLORS: [(&str, Rgba); 12] = [
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("silver", Rgba::rgb(192, 192, 192)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("teal", Rgba::rgb(0, 128, 128)),
];

impl FromStr for Rgba {
    type Err = ChartError;

    /// Parse `#rrggbb`, `#aarrggbb`, or a named colour (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ChartError::InvalidColor(s.to_string());

        let Some(hex) = s.strip_prefix('#') else {
            return NAMED_COLORS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(s))
                .map(|(_, c)| *c)
                .ok_or_else(invalid);
        };

        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_argb())
    }
}

/// Base colour per phase plus the shared alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePalette {
    pub new_moon: Rgba,
    pub waxing_crescent: Rgba,
    pub first_quarter: Rgba,
    pub waxing_gibbous: Rgba,
    pub full_moon: Rgba,
    pub waning_gibbous: Rgba,
    pub third_quarter: Rgba,
    pub waning_crescent: Rgba,
    pub alpha: u8,
}

impl Default for PhasePalette {
    fn default() -> Self {
        Self {
            new_moon: Rgba::rgb(0xa8, 0x99, 0x32),
            waxing_crescent: Rgba::rgb(0x8b, 0xa8, 0x32),
            first_quarter: Rgba::rgb(0x69, 0xa8, 0x32),
            waxing_gibbous: Rgba::rgb(0x32, 0xa8, 0x8e),
            full_moon: Rgba::rgb(0x14, 0x32, 0xa8),
            waning_gibbous: Rgba::rgb(0x55, 0x32, 0x9c),
            third_quarter: Rgba::rgb(0x7b, 0x1a, 0x99),
            waning_crescent: Rgba::rgb(0xad, 0x0e, 0x46),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl PhasePalette {
    /// Colour for a phase, with the palette alpha applied.
    pub fn color_for(&self, phase: Phase) -> Rgba {
        let base = match phase {
            Phase::NewMoon => self.new_moon,
            Phase::WaxingCrescent => self.waxing_crescent,
            Phase::FirstQuarter => self.first_quarter,
            Phase::WaxingGibbous => self.waxing_gibbous,
            Phase::FullMoon => self.full_moon,
            Phase::WaningGibbous => self.waning_gibbous,
            Phase::ThirdQuarter => self.third_quarter,
            Phase::WaningCrescent => self.waning_crescent,
        };
        base.with_alpha(self.alpha)
    }

    /// Colour for a phase given by name.
    ///
    /// Fails with `UnrecognizedPhaseName` for anything outside the eight
    /// canonical names.
    pub fn color_for_name(&self, name: &str) -> Result<Rgba, ChartError> {
        let phase: Phase = name.parse()?;
        Ok(self.color_for(phase))
    }

    /// Replace the base colour of one phase.
    pub fn set(&mut self, phase: Phase, color: Rgba) {
        let slot = match phase {
            Phase::NewMoon => &mut self.new_moon,
            Phase::WaxingCrescent => &mut self.waxing_crescent,
            Phase::FirstQuarter => &mut self.first_quarter,
            Phase::WaxingGibbous => &mut self.waxing_gibbous,
            Phase::FullMoon => &mut self.full_moon,
            Phase::WaningGibbous => &mut self.waning_gibbous,
            Phase::ThirdQuarter => &mut self.third_quarter,
            Phase::WaningCrescent => &mut self.waning_crescent,
        };
        *slot = color;
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}
