/// A point in normalized display space.
///
/// The origin is the centre of the viewport, `y` points up, `y` spans
/// `[-1, 1]` and `x` spans `[-aspect, aspect]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
