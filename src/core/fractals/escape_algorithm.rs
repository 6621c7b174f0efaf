use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colouring::policy::colourize;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParameters;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::complex_map::ComplexMap;
use crate::core::fractals::escape::evaluate;
use crate::core::util::pixel_to_screen_coords::{PixelToScreenCoordsError, pixel_to_screen_coords};
use crate::core::view::camera::CameraSnapshot;

/// Maps a pixel to its palette index for one frame's camera and parameters.
#[derive(Debug, Clone, Copy)]
pub struct EscapeAlgorithm {
    viewport: Viewport,
    camera: CameraSnapshot,
    map: ComplexMap,
    params: RenderParameters,
}

impl EscapeAlgorithm {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        camera: CameraSnapshot,
        map: ComplexMap,
        params: RenderParameters,
    ) -> Self {
        Self {
            viewport,
            camera,
            map,
            params,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl FractalAlgorithm for EscapeAlgorithm {
    type Success = f64;
    type Failure = PixelToScreenCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let screen = pixel_to_screen_coords(pixel, self.viewport)?;
        let coordinate = self.camera.screen_to_plane(screen);
        let result = evaluate(coordinate, &self.map, &self.params);

        Ok(colourize(&result, &self.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::variant::FractalVariant;
    use crate::core::view::camera::Camera;

    fn algorithm(width: u32, height: u32, camera: &Camera) -> EscapeAlgorithm {
        EscapeAlgorithm::new(
            Viewport::new(width, height).unwrap(),
            camera.snapshot(),
            ComplexMap::new(FractalVariant::Mandelbrot),
            RenderParameters::default(),
        )
    }

    #[test]
    fn centre_pixel_of_odd_viewport_samples_camera_centre() {
        let mut camera = Camera::new();
        camera.set_center(0.0, 0.0);

        // the origin is interior, so the index is the interior index
        let index = algorithm(3, 3, &camera).compute(Point { x: 1, y: 1 }).unwrap();

        assert_eq!(index, 0.0);
    }

    #[test]
    fn far_away_centre_escapes_immediately() {
        let mut camera = Camera::new();
        camera.set_zoom(-10.0);
        camera.set_center(2.0, 0.0);

        // c ≈ 2: escapes on iteration 1 of 30
        let index = algorithm(3, 3, &camera).compute(Point { x: 1, y: 1 }).unwrap();

        assert!((index - 1.0 / 30.0).abs() < 1e-12, "index={}", index);
    }

    #[test]
    fn pixel_outside_viewport_is_an_error() {
        let camera = Camera::new();

        let result = algorithm(3, 3, &camera).compute(Point { x: 3, y: 0 });

        assert!(matches!(
            result,
            Err(PixelToScreenCoordsError::PointOutsideViewport { .. })
        ));
    }

    #[test]
    fn snapshot_is_isolated_from_later_camera_changes() {
        let mut camera = Camera::new();
        camera.set_zoom(-10.0);
        let before = algorithm(1, 1, &camera);

        camera.set_center(2.0, 0.0);

        let index = before.compute(Point { x: 0, y: 0 }).unwrap();
        assert_eq!(index, 0.0);
        assert_eq!(
            camera.snapshot().screen_to_plane(Default::default()),
            Complex::new(2.0, 0.0)
        );
    }
}
