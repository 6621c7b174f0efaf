pub mod render_frame;
