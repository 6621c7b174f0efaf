use crate::core::actions::render_frame::render_frame::{Execution, RenderError, render_frame};
use crate::core::colouring::palette::Palette;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::{RenderParameters, RenderParametersError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::complex_map::ComplexMap;
use crate::core::fractals::escape_algorithm::EscapeAlgorithm;
use crate::core::fractals::kernel_source::{KernelSource, KernelSourceError, Precision};
use crate::core::fractals::variant::FractalVariant;
use crate::core::view::camera::{Camera, ViewState};
use log::{debug, info, warn};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("failed to build evaluation kernel: {0}")]
    Kernel(#[from] KernelSourceError),
}

/// One initialized renderer: a fixed variant and palette, plus the camera
/// and parameters the caller mutates between frames.
#[derive(Debug)]
pub struct RenderHandle {
    map: ComplexMap,
    precision: Precision,
    kernel: KernelSource,
    palette: Palette,
    params: RenderParameters,
    camera: Camera,
    execution: Execution,
    params_changed: bool,
    frames_rendered: u64,
}

impl RenderHandle {
    /// Binds the variant's step function and builds its kernel source.
    /// Fails without producing a handle.
    pub fn initialize(
        variant: FractalVariant,
        precision: Precision,
        palette: Palette,
        params: RenderParameters,
    ) -> Result<Self, InitError> {
        let kernel = KernelSource::generate(variant, precision)?;

        info!(
            "Initialized {} renderer ({} precision, {} palette with {} colours)",
            variant.display_name(),
            precision,
            palette.name(),
            palette.entries().len()
        );

        Ok(Self {
            map: ComplexMap::new(variant),
            precision,
            kernel,
            palette,
            params,
            camera: Camera::new(),
            execution: Execution::default(),
            params_changed: false,
            frames_rendered: 0,
        })
    }

    pub fn set_render_parameters(
        &mut self,
        escape_tolerance: f64,
        max_iterations: u32,
        colour_by_index: bool,
        render_julia_set: bool,
        julia_constant: Complex,
    ) -> Result<(), RenderParametersError> {
        let params = RenderParameters::new(
            escape_tolerance,
            max_iterations,
            colour_by_index,
            render_julia_set,
            julia_constant,
        )?;

        self.apply_render_parameters(params);

        Ok(())
    }

    pub fn apply_render_parameters(&mut self, params: RenderParameters) {
        if params != self.params {
            debug!("Render parameters changed: {:?}", params);
            self.params = params;
            self.params_changed = true;
        }
    }

    pub fn set_execution(&mut self, execution: Execution) {
        self.execution = execution;
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.camera.pan(dx, dy);
    }

    pub fn zoom(&mut self, delta_y: f64) {
        self.camera.zoom_by(delta_y);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.camera.rotate_by(degrees);
    }

    pub fn gesture(&mut self, angle_delta: f64, scale_delta: f64) {
        self.camera.gesture(angle_delta, scale_delta);
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.camera.set_view(view);
    }

    /// Adopts a new surface size. Zero-sized surfaces are logged and ignored
    /// so the last valid viewport stays in effect.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        match self.camera.resize(width, height) {
            Ok(true) => info!(
                "Viewport resized to {}x{} (aspect {:.4})",
                width,
                height,
                self.camera.aspect()
            ),
            Ok(false) => {}
            Err(ViewportError::Degenerate { width, height }) => {
                warn!("Ignoring degenerate resize to {}x{}", width, height);
            }
        }
    }

    #[must_use]
    pub fn redraw_pending(&self) -> bool {
        self.camera.redraw_pending() || self.params_changed
    }

    /// Renders the current camera and parameters from scratch.
    pub fn render_frame(&mut self) -> Result<PixelBuffer, RenderError> {
        let viewport = self.camera.viewport().ok_or(RenderError::NoViewport)?;
        let algorithm = self.snapshot(viewport);

        self.camera.take_redraw();
        self.params_changed = false;

        let start = Instant::now();
        let frame = render_frame(&algorithm, &self.palette, self.execution)?;
        self.frames_rendered += 1;

        debug!(
            "Frame {} rendered: {} pixels in {:?}",
            self.frames_rendered,
            viewport.size(),
            start.elapsed()
        );

        Ok(frame)
    }

    fn snapshot(&self, viewport: Viewport) -> EscapeAlgorithm {
        EscapeAlgorithm::new(viewport, self.camera.snapshot(), self.map, self.params)
    }

    #[must_use]
    pub fn kernel_source(&self) -> &KernelSource {
        &self.kernel
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.map.variant()
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn render_parameters(&self) -> RenderParameters {
        self.params
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
