use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::{Viewport, ViewportError};
use log::debug;
use std::f64::consts::PI;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DRAG_SPEED: f64 = 0.001;
pub const ZOOM_SENSITIVITY: f64 = 0.005;

const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// Position of the camera over the plane: log2 scale, centre and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub center: Complex,
    pub angle: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: Complex::ZERO,
            angle: 0.0,
        }
    }
}

/// 2x2 rotation matrix, cached whenever the angle changes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    cos: f64,
    sin: f64,
}

impl Rotation {
    fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.cos * x - self.sin * y, self.sin * x + self.cos * y)
    }

    fn apply_transposed(&self, x: f64, y: f64) -> (f64, f64) {
        (self.cos * x + self.sin * y, -self.sin * x + self.cos * y)
    }
}

/// Immutable copy of everything a render pass needs to map screen space onto
/// the plane. Taken once per frame so every pixel sees the same camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    center: Complex,
    scale: f64,
    rotation: Rotation,
}

impl CameraSnapshot {
    /// Scale, then rotate, then translate.
    #[inline]
    #[must_use]
    pub fn screen_to_plane(&self, point: ScreenPoint) -> Complex {
        let (x, y) = self.rotation.apply(point.x * self.scale, point.y * self.scale);

        Complex::new(self.center.real + x, self.center.imag + y)
    }

    #[must_use]
    pub fn plane_to_screen(&self, coordinate: Complex) -> ScreenPoint {
        let (x, y) = self.rotation.apply_transposed(
            coordinate.real - self.center.real,
            coordinate.imag - self.center.imag,
        );

        ScreenPoint::new(x / self.scale, y / self.scale)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// The pan/zoom/rotate view transform.
///
/// Every setter recomputes the cached rotation and flags that a redraw is
/// owed; the render side clears the flag with [`Camera::take_redraw`].
/// Zoom and angle are unbounded.
#[derive(Debug, Clone)]
pub struct Camera {
    view: ViewState,
    rotation: Rotation,
    viewport: Option<Viewport>,
    aspect: f64,
    corners: [ScreenPoint; 4],
    redraw_pending: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    #[must_use]
    pub fn new() -> Self {
        let view = ViewState::default();

        Self {
            view,
            rotation: Rotation::from_angle(view.angle),
            viewport: None,
            aspect: 1.0,
            corners: corners_for_aspect(1.0),
            redraw_pending: true,
        }
    }

    /// Adopts a new output size. Degenerate sizes are rejected and leave the
    /// camera untouched. Returns whether anything changed.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, ViewportError> {
        let viewport = Viewport::new(width, height)?;

        if self.viewport == Some(viewport) {
            return Ok(false);
        }

        self.viewport = Some(viewport);
        self.aspect = viewport.aspect();
        self.corners = corners_for_aspect(self.aspect);
        self.redraw_pending = true;

        debug!("Camera resized to {}x{} (aspect {:.4})", width, height, self.aspect);

        Ok(true)
    }

    pub fn set_center(&mut self, x: f64, y: f64) {
        self.view.center = Complex::new(x, y);
        self.redraw_pending = true;
    }

    pub fn set_angle(&mut self, radians: f64) {
        self.view.angle = radians;
        self.rotation = Rotation::from_angle(radians);
        self.redraw_pending = true;
    }

    pub fn set_zoom(&mut self, log_scale: f64) {
        self.view.zoom = log_scale;
        self.redraw_pending = true;
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.set_zoom(view.zoom);
        self.set_center(view.center.real, view.center.imag);
        self.set_angle(view.angle);
    }

    /// Drag by a screen delta. The delta is taken back through the rotation
    /// so dragging follows the pointer at any angle; `y` is flipped.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let delta = Complex::new(dx, dy).rotated(-self.view.angle);
        let speed = DRAG_SPEED * self.scale();
        let center = self.view.center;

        self.set_center(
            center.real - speed * delta.real,
            center.imag + speed * delta.imag,
        );
    }

    pub fn zoom_by(&mut self, delta_y: f64) {
        self.set_zoom(self.view.zoom + ZOOM_SENSITIVITY * delta_y);
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.set_angle(self.view.angle + DEGREES_TO_RADIANS * degrees);
    }

    /// A pinch/rotate gesture: `scale_delta` is turned into an equivalent
    /// scroll delta so both paths share the zoom sensitivity.
    pub fn gesture(&mut self, angle_delta: f64, scale_delta: f64) {
        let delta_y = -scale_delta / ZOOM_SENSITIVITY;

        self.zoom_by(delta_y);
        self.rotate_by(angle_delta);
    }

    /// Effective plane units per screen unit, `2^zoom`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.view.zoom.exp2()
    }

    #[must_use]
    pub fn screen_to_plane(&self, point: ScreenPoint) -> Complex {
        self.snapshot().screen_to_plane(point)
    }

    #[must_use]
    pub fn plane_to_screen(&self, coordinate: Complex) -> ScreenPoint {
        self.snapshot().plane_to_screen(coordinate)
    }

    #[must_use]
    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            center: self.view.center,
            scale: self.scale(),
            rotation: self.rotation,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Viewport corners in triangle-strip order.
    #[must_use]
    pub fn corners(&self) -> [ScreenPoint; 4] {
        self.corners
    }

    #[must_use]
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Returns whether a redraw was owed and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}

fn corners_for_aspect(aspect: f64) -> [ScreenPoint; 4] {
    [
        ScreenPoint::new(aspect, 1.0),
        ScreenPoint::new(-aspect, 1.0),
        ScreenPoint::new(aspect, -1.0),
        ScreenPoint::new(-aspect, -1.0),
    ]
}
