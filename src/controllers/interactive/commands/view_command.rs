use crate::core::data::render_params::RenderParameters;
use crate::core::view::camera::ViewState;
use crate::core::view::presets::ViewPreset;

/// One already-normalized input, applied to the renderer in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    Resize { width: u32, height: u32 },
    Pan { dx: f64, dy: f64 },
    Zoom { delta_y: f64 },
    Rotate { degrees: f64 },
    Gesture { angle_delta: f64, scale_delta: f64 },
    SetView(ViewState),
    GoToPreset(ViewPreset),
    SetRenderParameters(RenderParameters),
}
