use crate::core::colouring::palette::{Palette, PaletteError, Sampling, parse_hex_colour};
use crate::core::colouring::presets::PalettePreset;
use crate::core::data::complex::Complex;
use crate::core::data::render_params::{
    DEFAULT_ESCAPE_TOLERANCE, DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS, RenderParameters,
    RenderParametersError,
};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::kernel_source::Precision;
use crate::core::fractals::variant::FractalVariant;
use crate::core::view::camera::ViewState;
use crate::core::view::presets::ViewPreset;
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidConfigError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfigError {
    #[error("[render] {0}")]
    RenderParameters(#[from] RenderParametersError),
    #[error("[palette] {0}")]
    Palette(#[from] PaletteError),
    #[error("[output] {0}")]
    OutputSize(#[from] ViewportError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub render: RenderConfig,
    pub palette: PaletteConfig,
    pub view: ViewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub variant: FractalVariant,
    pub precision: Precision,
    pub escape_tolerance: f64,
    pub max_iterations: u32,
    pub colour_by_index: bool,
    pub render_julia_set: bool,
    pub julia_constant: [f64; 2],
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub preset: PalettePreset,
    /// `#rrggbb` entries replacing the preset when present.
    pub colours: Option<Vec<String>>,
    pub invert: bool,
    pub sampling: Sampling,
}

/// A named preset, optionally overridden field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub preset: ViewPreset,
    pub zoom: Option<f64>,
    pub center: Option<[f64; 2]>,
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant: FractalVariant::default(),
            precision: Precision::default(),
            escape_tolerance: DEFAULT_ESCAPE_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_by_index: true,
            render_julia_set: false,
            julia_constant: [DEFAULT_JULIA_CONSTANT.real, DEFAULT_JULIA_CONSTANT.imag],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Checked, typed form of an [`ExplorerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSettings {
    pub variant: FractalVariant,
    pub precision: Precision,
    pub params: RenderParameters,
    pub palette: Palette,
    pub view: ViewState,
    pub viewport: Viewport,
}

impl ExplorerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<ExplorerSettings, InvalidConfigError> {
        let render = &self.render;
        let params = RenderParameters::new(
            render.escape_tolerance,
            render.max_iterations,
            render.colour_by_index,
            render.render_julia_set,
            Complex::new(render.julia_constant[0], render.julia_constant[1]),
        )?;

        Ok(ExplorerSettings {
            variant: render.variant,
            precision: render.precision,
            params,
            palette: self.palette.build()?,
            view: self.view.resolve(),
            viewport: Viewport::new(self.output.width, self.output.height)?,
        })
    }
}

impl PaletteConfig {
    fn build(&self) -> Result<Palette, PaletteError> {
        match &self.colours {
            Some(colours) => {
                let hex_colours = colours
                    .iter()
                    .map(|colour| parse_hex_colour(colour))
                    .collect::<Result<Vec<_>, _>>()?;

                Palette::from_hex("custom", &hex_colours, self.invert, self.sampling)
            }
            None => Palette::from_preset(self.preset, self.invert, self.sampling),
        }
    }
}

impl ViewConfig {
    fn resolve(&self) -> ViewState {
        let preset = self.preset.view();

        ViewState {
            zoom: self.zoom.unwrap_or(preset.zoom),
            center: self
                .center
                .map_or(preset.center, |[real, imag]| Complex::new(real, imag)),
            angle: self.angle.unwrap_or(preset.angle),
        }
    }
}
