use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    Degenerate { width: u32, height: u32 },
}

/// Output surface dimensions in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::Degenerate { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(800, 600).unwrap();

        assert_eq!(viewport.width(), 800);
        assert_eq!(viewport.height(), 600);
        assert_eq!(viewport.size(), 480_000);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0, 600),
            Err(ViewportError::Degenerate { width: 0, height: 600 })
        );
        assert_eq!(
            Viewport::new(800, 0),
            Err(ViewportError::Degenerate { width: 800, height: 0 })
        );
        assert_eq!(
            Viewport::new(0, 0),
            Err(ViewportError::Degenerate { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_viewport_is_valid() {
        let viewport = Viewport::new(1, 1).unwrap();

        assert_eq!(viewport.aspect(), 1.0);
        assert!(viewport.contains_point(Point { x: 0, y: 0 }));
    }

    #[test]
    fn test_viewport_aspect() {
        let viewport = Viewport::new(1600, 800).unwrap();

        assert_eq!(viewport.aspect(), 2.0);
    }

    #[test]
    fn test_viewport_contains_point() {
        let viewport = Viewport::new(100, 50).unwrap();

        assert!(viewport.contains_point(Point { x: 0, y: 0 }));
        assert!(viewport.contains_point(Point { x: 99, y: 49 }));
        assert!(!viewport.contains_point(Point { x: 100, y: 10 }));
        assert!(!viewport.contains_point(Point { x: 10, y: 50 }));
    }
}
