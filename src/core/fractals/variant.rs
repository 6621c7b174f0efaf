use crate::core::data::names::{UnknownNameError, parse_named};
use serde::Deserialize;
use std::str::FromStr;

/// Selects the recurrence `z' = f(z, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Rk1,
    Rk2,
    Rk3,
    Rk4,
    Rk3Twist,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Rk1,
        Self::Rk2,
        Self::Rk3,
        Self::Rk4,
        Self::Rk3Twist,
    ];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Rk1 => "rk1",
            Self::Rk2 => "rk2",
            Self::Rk3 => "rk3",
            Self::Rk4 => "rk4",
            Self::Rk3Twist => "rk3twist",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Rk1 => "Runge-Kutta order 1",
            Self::Rk2 => "Runge-Kutta order 2",
            Self::Rk3 => "Runge-Kutta order 3",
            Self::Rk4 => "Runge-Kutta order 4",
            Self::Rk3Twist => "Runge-Kutta order 3 with inverse twist",
        }
    }
}

impl std::fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalVariant {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(Self::ALL, Self::identifier, "fractal variant", s)
    }
}
