//! Traits the interactive controller drives its output through.

pub mod presenter_port;
