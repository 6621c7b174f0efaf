use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::colouring::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_algorithm::EscapeAlgorithm;
use crate::core::util::pixel_to_screen_coords::PixelToScreenCoordsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("no viewport yet, a valid size must be observed before rendering")]
    NoViewport,
    #[error("fractal algorithm failed: {0}")]
    Algorithm(#[from] PixelToScreenCoordsError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    Serial,
    #[default]
    Parallel,
}

/// Evaluates and colours one full frame from an immutable algorithm snapshot.
pub fn render_frame(
    algorithm: &EscapeAlgorithm,
    palette: &Palette,
    execution: Execution,
) -> Result<PixelBuffer, RenderError> {
    let viewport = algorithm.viewport();

    let indices = match execution {
        Execution::Serial => generate_fractal(viewport, algorithm)?,
        Execution::Parallel => generate_fractal_rayon(viewport, algorithm)?,
    };

    Ok(generate_pixel_buffer(indices, palette, viewport)?)
}
