use crate::core::actions::render_frame::render_frame::RenderError;

#[derive(Debug)]
pub struct FrameError {
    pub generation: u64,
    pub error: RenderError,
}
