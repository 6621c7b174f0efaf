//! Interactive controller for an explorable fractal view.
//!
//! Inputs arrive as [`ViewCommand`]s, already normalized by whatever owns the
//! window or event loop. The controller applies each one to its
//! [`RenderHandle`](crate::core::session::render_handle::RenderHandle),
//! re-renders synchronously whenever a redraw is owed, and hands the result
//! to an [`InteractiveControllerPresenterPort`].

pub mod commands;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use commands::view_command::ViewCommand;
pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
