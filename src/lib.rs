pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use config::{ExplorerConfig, ExplorerSettings};
pub use controllers::cli::render_to_file::CliRenderController;
pub use controllers::interactive::{InteractiveController, ViewCommand};
pub use crate::core::session::render_handle::{InitError, RenderHandle};
pub use presenters::file::ppm::PpmFilePresenter;
