use crate::core::data::point::Point;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToScreenCoordsError {
    #[error("pixel (x: {x}, y: {y}) is outside the {width}x{height} viewport")]
    PointOutsideViewport { x: u32, y: u32, width: u32, height: u32 },
}

/// Maps the centre of a pixel onto aspect-corrected screen space.
pub fn pixel_to_screen_coords(
    pixel: Point,
    viewport: Viewport,
) -> Result<ScreenPoint, PixelToScreenCoordsError> {
    if !viewport.contains_point(pixel) {
        return Err(PixelToScreenCoordsError::PointOutsideViewport {
            x: pixel.x,
            y: pixel.y,
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let x = ((f64::from(pixel.x) + 0.5) / width * 2.0 - 1.0) * viewport.aspect();
    let y = 1.0 - (f64::from(pixel.y) + 0.5) / height * 2.0;

    Ok(ScreenPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_screen_approx_eq(actual: ScreenPoint, expected: ScreenPoint) {
        assert!(
            (actual.x - expected.x).abs() <= EPSILON && (actual.y - expected.y).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_single_pixel_maps_to_origin() {
        let viewport = Viewport::new(1, 1).unwrap();

        let result = pixel_to_screen_coords(Point { x: 0, y: 0 }, viewport).unwrap();

        assert_screen_approx_eq(result, ScreenPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_top_left_pixel_is_up_and_left() {
        let viewport = Viewport::new(4, 2).unwrap();

        // aspect 2: x = (0.5 / 4 * 2 - 1) * 2, y = 1 - 0.5 / 2 * 2
        let result = pixel_to_screen_coords(Point { x: 0, y: 0 }, viewport).unwrap();

        assert_screen_approx_eq(result, ScreenPoint::new(-1.5, 0.5));
    }

    #[test]
    fn test_bottom_right_pixel_is_down_and_right() {
        let viewport = Viewport::new(4, 2).unwrap();

        let result = pixel_to_screen_coords(Point { x: 3, y: 1 }, viewport).unwrap();

        assert_screen_approx_eq(result, ScreenPoint::new(1.5, -0.5));
    }

    #[test]
    fn test_pixels_stay_inside_aspect_bounds() {
        let viewport = Viewport::new(16, 9).unwrap();
        let aspect = viewport.aspect();

        for y in 0..9 {
            for x in 0..16 {
                let point = pixel_to_screen_coords(Point { x, y }, viewport).unwrap();

                assert!(point.x.abs() < aspect);
                assert!(point.y.abs() < 1.0);
            }
        }
    }

    #[test]
    fn test_pixel_outside_viewport_fails() {
        let viewport = Viewport::new(10, 10).unwrap();

        let result = pixel_to_screen_coords(Point { x: 10, y: 3 }, viewport);

        assert_eq!(
            result,
            Err(PixelToScreenCoordsError::PointOutsideViewport {
                x: 10,
                y: 3,
                width: 10,
                height: 10
            })
        );
    }
}
