//! Observer hemisphere and the phase glyph tables.
//!
//! The northern table walks the closed cycle dark → full → dark, ending on a
//! second dark disc. The southern table is that 9-entry sequence reversed, so
//! segment `i` maps to `NORTHERN_SYMBOLS[8 - i]`: New Moon and Full Moon keep
//! their glyphs while the crescents and gibbous discs mirror.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Hemisphere the moon is observed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

/// Glyphs as seen from the northern hemisphere.
pub const NORTHERN_SYMBOLS: [&str; 9] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", "🌑"];

/// Glyphs as seen from the southern hemisphere (northern table reversed).
pub const SOUTHERN_SYMBOLS: [&str; 9] = ["🌑", "🌘", "🌗", "🌖", "🌕", "🌔", "🌓", "🌒", "🌑"];

impl Hemisphere {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Northern => "Northern",
            Self::Southern => "Southern",
        }
    }

    /// Glyph table for this hemisphere.
    pub const fn symbols(self) -> &'static [&'static str; 9] {
        match self {
            Self::Northern => &NORTHERN_SYMBOLS,
            Self::Southern => &SOUTHERN_SYMBOLS,
        }
    }

    /// Glyph for a 0-based segment index.
    ///
    /// Panics if `segment_index > 8`; callers pass indices from the
    /// 8-segment boundary table.
    pub const fn symbol(self, segment_index: usize) -> &'static str {
        self.symbols()[segment_index]
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hemisphere {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Self::Northern),
            "southern" | "south" | "s" => Ok(Self::Southern),
            other => Err(format!("unknown hemisphere: {other} (northern|southern)")),
        }
    }
}
