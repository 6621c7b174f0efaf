use crate::controllers::interactive::commands::view_command::ViewCommand;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::frame_error::FrameError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::session::render_handle::RenderHandle;
use log::info;
use std::sync::Arc;
use std::time::Instant;

pub struct InteractiveController {
    handle: RenderHandle,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    generation: u64,
}

impl InteractiveController {
    pub fn new(
        handle: RenderHandle,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        Self {
            handle,
            presenter_port,
            generation: 0,
        }
    }

    /// Applies one command and, if it left a redraw owed, renders and
    /// presents a frame before returning. Returns the generation of the
    /// presented event, if any.
    pub fn dispatch(&mut self, command: ViewCommand) -> Option<u64> {
        self.apply(command);

        // nothing can be drawn until a valid size has been observed
        if !self.handle.redraw_pending() || self.handle.camera().viewport().is_none() {
            return None;
        }

        Some(self.redraw())
    }

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Resize { width, height } => self.handle.on_resize(width, height),
            ViewCommand::Pan { dx, dy } => self.handle.pan(dx, dy),
            ViewCommand::Zoom { delta_y } => self.handle.zoom(delta_y),
            ViewCommand::Rotate { degrees } => self.handle.rotate(degrees),
            ViewCommand::Gesture {
                angle_delta,
                scale_delta,
            } => self.handle.gesture(angle_delta, scale_delta),
            ViewCommand::SetView(view) => self.handle.set_view(view),
            ViewCommand::GoToPreset(preset) => {
                info!("Going to '{}' view", preset);
                self.handle.set_view(preset.view());
            }
            ViewCommand::SetRenderParameters(params) => self.handle.apply_render_parameters(params),
        }
    }

    fn redraw(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        let start = Instant::now();
        let result = self.handle.render_frame();
        let render_duration = start.elapsed();

        let event = match result {
            Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                generation,
                pixel_buffer,
                render_duration,
            }),
            Err(error) => RenderEvent::Error(FrameError { generation, error }),
        };

        self.presenter_port.present(event);

        generation
    }

    #[must_use]
    pub fn handle(&self) -> &RenderHandle {
        &self.handle
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }
}
