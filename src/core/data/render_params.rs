use crate::core::data::complex::Complex;
use thiserror::Error;

/// Hard ceiling on iterations per pixel, independent of `max_iterations`.
pub const HARD_ITERATION_CAP: u32 = 200;

pub const DEFAULT_ESCAPE_TOLERANCE: f64 = 4.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderParametersError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("maximum iterations {max_iterations} exceeds the hard cap of {cap}")]
    MaxIterationsExceedsCap { max_iterations: u32, cap: u32 },
    #[error("escape tolerance must be a positive finite number, got {escape_tolerance}")]
    NonPositiveEscapeTolerance { escape_tolerance: f64 },
    #[error("julia constant must be finite, got {real} + {imag}i")]
    NonFiniteJuliaConstant { real: f64, imag: f64 },
}

/// Live per-frame evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    escape_tolerance: f64,
    max_iterations: u32,
    colour_by_index: bool,
    render_julia_set: bool,
    julia_constant: Complex,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            escape_tolerance: DEFAULT_ESCAPE_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_by_index: true,
            render_julia_set: false,
            julia_constant: DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl RenderParameters {
    pub fn new(
        escape_tolerance: f64,
        max_iterations: u32,
        colour_by_index: bool,
        render_julia_set: bool,
        julia_constant: Complex,
    ) -> Result<Self, RenderParametersError> {
        if max_iterations == 0 {
            return Err(RenderParametersError::ZeroMaxIterations);
        }

        if max_iterations > HARD_ITERATION_CAP {
            return Err(RenderParametersError::MaxIterationsExceedsCap {
                max_iterations,
                cap: HARD_ITERATION_CAP,
            });
        }

        if !escape_tolerance.is_finite() || escape_tolerance <= 0.0 {
            return Err(RenderParametersError::NonPositiveEscapeTolerance { escape_tolerance });
        }

        if !julia_constant.is_finite() {
            return Err(RenderParametersError::NonFiniteJuliaConstant {
                real: julia_constant.real,
                imag: julia_constant.imag,
            });
        }

        Ok(Self {
            escape_tolerance,
            max_iterations,
            colour_by_index,
            render_julia_set,
            julia_constant,
        })
    }

    #[must_use]
    pub fn escape_tolerance(&self) -> f64 {
        self.escape_tolerance
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_by_index(&self) -> bool {
        self.colour_by_index
    }

    #[must_use]
    pub fn render_julia_set(&self) -> bool {
        self.render_julia_set
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }
}
