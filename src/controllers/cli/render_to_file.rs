use crate::config::ExplorerSettings;
use crate::controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent, ViewCommand,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::session::render_handle::{InitError, RenderHandle};
use log::info;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliRenderError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("no frame was rendered")]
    NoFrame,
}

/// Keeps only the most recent event.
#[derive(Default)]
struct LatestEvent {
    event: Mutex<Option<RenderEvent>>,
}

impl LatestEvent {
    fn take(&self) -> Option<RenderEvent> {
        self.event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl InteractiveControllerPresenterPort for LatestEvent {
    fn present(&self, event: RenderEvent) {
        *self.event.lock().unwrap_or_else(PoisonError::into_inner) = Some(event);
    }
}

/// Headless session: replays input commands against a fresh renderer and
/// writes the final frame through a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// Starts at `settings.view`, applies `commands` in order, then sizes the
    /// viewport, so exactly one frame is rendered.
    pub fn generate(
        &mut self,
        settings: ExplorerSettings,
        commands: &[ViewCommand],
    ) -> Result<(), CliRenderError> {
        let handle = RenderHandle::initialize(
            settings.variant,
            settings.precision,
            settings.palette,
            settings.params,
        )?;
        let latest = Arc::new(LatestEvent::default());
        let mut controller = InteractiveController::new(
            handle,
            Arc::clone(&latest) as Arc<dyn InteractiveControllerPresenterPort>,
        );

        controller.dispatch(ViewCommand::SetView(settings.view));
        for &command in commands {
            controller.dispatch(command);
        }
        controller.dispatch(ViewCommand::Resize {
            width: settings.viewport.width(),
            height: settings.viewport.height(),
        });

        match latest.take() {
            Some(RenderEvent::Frame(frame)) => {
                info!(
                    "Rendered {}x{} frame in {:?}",
                    settings.viewport.width(),
                    settings.viewport.height(),
                    frame.render_duration
                );
                self.buffer = Some(frame.pixel_buffer);
                Ok(())
            }
            Some(RenderEvent::Error(failure)) => Err(failure.error.into()),
            None => Err(CliRenderError::NoFrame),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
        }

        Ok(())
    }
}
