use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colouring::presets::PalettePreset;
use crate::core::data::colour::Colour;
use crate::core::data::names::{UnknownNameError, parse_named};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_PALETTE_ENTRIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette needs at least {MIN_PALETTE_ENTRIES} colours, got {entries}")]
    TooFewEntries { entries: usize },
    #[error("invalid colour '{value}', expected #rrggbb")]
    InvalidHex { value: String },
}

/// Texel filtering applied when sampling the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    Nearest,
    #[default]
    Linear,
}

impl Sampling {
    pub const ALL: &'static [Self] = &[Self::Linear, Self::Nearest];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}

impl FromStr for Sampling {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(Self::ALL, Self::identifier, "sampling mode", s)
    }
}

/// An immutable colour ramp sampled like a one-row texture with
/// clamp-to-edge wrapping. Texel `i` sits at `(i + 0.5) / N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    entries: Vec<Colour>,
    sampling: Sampling,
}

impl Palette {
    pub fn new(
        name: impl Into<String>,
        entries: Vec<Colour>,
        sampling: Sampling,
    ) -> Result<Self, PaletteError> {
        if entries.len() < MIN_PALETTE_ENTRIES {
            return Err(PaletteError::TooFewEntries {
                entries: entries.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            entries,
            sampling,
        })
    }

    /// Builds a palette from packed `0xRRGGBB` values, optionally reversed.
    pub fn from_hex(
        name: impl Into<String>,
        hex_colours: &[u32],
        invert: bool,
        sampling: Sampling,
    ) -> Result<Self, PaletteError> {
        let mut entries: Vec<Colour> = hex_colours.iter().copied().map(Colour::from_hex).collect();

        if invert {
            entries.reverse();
        }

        Self::new(name, entries, sampling)
    }

    pub fn from_preset(
        preset: PalettePreset,
        invert: bool,
        sampling: Sampling,
    ) -> Result<Self, PaletteError> {
        Self::from_hex(preset.identifier(), preset.hex_colours(), invert, sampling)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    #[must_use]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    #[must_use]
    pub fn sample(&self, index: f64) -> Colour {
        let index = if index.is_nan() { 0.0 } else { index };

        match self.sampling {
            Sampling::Nearest => self.sample_nearest(index),
            Sampling::Linear => self.sample_linear(index),
        }
    }

    fn sample_nearest(&self, index: f64) -> Colour {
        let texel = (index * self.entries.len() as f64).floor();
        self.entries[self.clamp_texel(texel)]
    }

    fn sample_linear(&self, index: f64) -> Colour {
        let position = index * self.entries.len() as f64 - 0.5;
        let lower = position.floor();
        let fraction = position - lower;

        let from = self.entries[self.clamp_texel(lower)];
        let to = self.entries[self.clamp_texel(lower + 1.0)];

        from.lerp(to, fraction)
    }

    fn clamp_texel(&self, texel: f64) -> usize {
        let last = (self.entries.len() - 1) as f64;
        texel.clamp(0.0, last) as usize
    }
}

impl ColourMap<f64> for Palette {
    fn map(&self, index: f64) -> Colour {
        self.sample(index)
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

/// Parses `#rrggbb` (the leading `#` is optional) into a packed value.
pub fn parse_hex_colour(value: &str) -> Result<u32, PaletteError> {
    let digits = value.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex {
            value: value.to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|_| PaletteError::InvalidHex {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone(sampling: Sampling) -> Palette {
        Palette::from_hex("two-tone", &[0x000000, 0xffffff], false, sampling).unwrap()
    }

    #[test]
    fn test_palette_needs_two_entries() {
        let result = Palette::from_hex("short", &[0x123456], false, Sampling::Linear);

        assert_eq!(result, Err(PaletteError::TooFewEntries { entries: 1 }));
    }

    #[test]
    fn test_from_preset_keeps_order() {
        let palette = Palette::from_preset(PalettePreset::Classic, false, Sampling::Linear).unwrap();

        assert_eq!(palette.entries().len(), 5);
        assert_eq!(palette.entries()[0], Colour::from_hex(0x212734));
        assert_eq!(palette.display_name(), "classic");
    }

    #[test]
    fn test_invert_reverses_entries() {
        let palette = Palette::from_preset(PalettePreset::Classic, true, Sampling::Linear).unwrap();

        assert_eq!(palette.entries()[0], Colour::from_hex(0xF8F0ED));
        assert_eq!(palette.entries()[4], Colour::from_hex(0x212734));
    }

    #[test]
    fn test_linear_clamps_to_edges() {
        let palette = two_tone(Sampling::Linear);

        assert_eq!(palette.sample(0.0), Colour::from_hex(0x000000));
        assert_eq!(palette.sample(0.25), Colour::from_hex(0x000000));
        assert_eq!(palette.sample(0.75), Colour::from_hex(0xffffff));
        assert_eq!(palette.sample(1.0), Colour::from_hex(0xffffff));
        assert_eq!(palette.sample(-3.0), Colour::from_hex(0x000000));
        assert_eq!(palette.sample(7.0), Colour::from_hex(0xffffff));
    }

    #[test]
    fn test_linear_blends_between_texel_centres() {
        let palette = two_tone(Sampling::Linear);
        let middle = palette.sample(0.5);

        assert_eq!(middle.r, 128);
        assert_eq!(middle.g, 128);
        assert_eq!(middle.b, 128);
        assert_eq!(middle.a, 255);
    }

    #[test]
    fn test_nearest_picks_containing_texel() {
        let palette = Palette::from_hex(
            "rgb",
            &[0xff0000, 0x00ff00, 0x0000ff],
            false,
            Sampling::Nearest,
        )
        .unwrap();

        assert_eq!(palette.sample(0.0), Colour::from_hex(0xff0000));
        assert_eq!(palette.sample(0.34), Colour::from_hex(0x00ff00));
        assert_eq!(palette.sample(0.99), Colour::from_hex(0x0000ff));
        assert_eq!(palette.sample(1.0), Colour::from_hex(0x0000ff));
    }

    #[test]
    fn test_nan_index_samples_first_entry() {
        assert_eq!(two_tone(Sampling::Linear).sample(f64::NAN), Colour::from_hex(0x000000));
        assert_eq!(two_tone(Sampling::Nearest).sample(f64::NAN), Colour::from_hex(0x000000));
    }

    #[test]
    fn test_parse_hex_colour() {
        assert_eq!(parse_hex_colour("#1c2031"), Ok(0x1c2031));
        assert_eq!(parse_hex_colour("F5F1C9"), Ok(0xf5f1c9));
        assert!(matches!(parse_hex_colour("#12345"), Err(PaletteError::InvalidHex { .. })));
        assert!(matches!(parse_hex_colour("#zzzzzz"), Err(PaletteError::InvalidHex { .. })));
    }

    #[test]
    fn test_parse_hex_colour_rejects_signs() {
        assert!(matches!(parse_hex_colour("#+12345"), Err(PaletteError::InvalidHex { .. })));
        assert!(matches!(parse_hex_colour("-12345"), Err(PaletteError::InvalidHex { .. })));
    }
}
