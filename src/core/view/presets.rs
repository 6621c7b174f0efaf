use crate::core::data::complex::Complex;
use crate::core::data::names::{UnknownNameError, parse_named};
use crate::core::view::camera::ViewState;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    #[default]
    Home,
    About,
    Info,
    Contact,
}

impl ViewPreset {
    pub const ALL: &'static [Self] = &[Self::Home, Self::About, Self::Info, Self::Contact];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Info => "info",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn view(self) -> ViewState {
        let (zoom, real, imag) = match self {
            Self::Home => (-5.0, -0.916, 0.3048),
            Self::About => (-6.06, -0.75379, -0.11206),
            Self::Info => (-6.06, 0.34212, 0.52298),
            Self::Contact => (-12.89, -1.98619, -0.00031829),
        };

        ViewState {
            zoom,
            center: Complex::new(real, imag),
            angle: 0.0,
        }
    }
}

impl std::fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).identifier())
    }
}

impl FromStr for ViewPreset {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(Self::ALL, Self::identifier, "view preset", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_default() {
        assert_eq!(ViewPreset::default(), ViewPreset::Home);
    }

    #[test]
    fn presets_are_unrotated() {
        for &preset in ViewPreset::ALL {
            assert_eq!(preset.view().angle, 0.0, "{} is rotated", preset);
        }
    }

    #[test]
    fn contact_is_the_deepest_zoom() {
        let deepest = ViewPreset::ALL
            .iter()
            .min_by(|a, b| a.view().zoom.total_cmp(&b.view().zoom));

        assert_eq!(deepest, Some(&ViewPreset::Contact));
    }

    #[test]
    fn home_view_values() {
        let view = ViewPreset::Home.view();

        assert_eq!(view.zoom, -5.0);
        assert_eq!(view.center, Complex::new(-0.916, 0.3048));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("About".parse::<ViewPreset>(), Ok(ViewPreset::About));
        assert!("settings".parse::<ViewPreset>().is_err());
    }
}
