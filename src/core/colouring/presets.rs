use crate::core::data::names::{UnknownNameError, parse_named};
use serde::Deserialize;
use std::str::FromStr;

const UGLY: &[u32] = &[0x303832, 0x74A37A, 0xD9F3E5, 0xD8BE91, 0xD8BE91, 0x9F4E43];
const CLASSIC: &[u32] = &[0x212734, 0x6587B4, 0x69B6CD, 0xC3DFE9, 0xF8F0ED];
const VICTORIAN: &[u32] = &[
    0x1c2031, 0x204457, 0x549499, 0xa7c7b7, 0x8b72c2, 0x6e5785, 0x413452, 0xc75672, 0xf96b69,
    0xf5f1c9,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    #[default]
    Victorian,
    Classic,
    Ugly,
}

impl PalettePreset {
    pub const ALL: &'static [Self] = &[Self::Victorian, Self::Classic, Self::Ugly];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Victorian => "victorian",
            Self::Classic => "classic",
            Self::Ugly => "ugly",
        }
    }

    /// Packed `0xRRGGBB` entries, first entry is the interior colour.
    #[must_use]
    pub const fn hex_colours(self) -> &'static [u32] {
        match self {
            Self::Victorian => VICTORIAN,
            Self::Classic => CLASSIC,
            Self::Ugly => UGLY,
        }
    }
}

impl std::fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).identifier())
    }
}

impl FromStr for PalettePreset {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(Self::ALL, Self::identifier, "palette preset", s)
    }
}
