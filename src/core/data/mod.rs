pub mod colour;
pub mod complex;
pub mod names;
pub mod pixel_buffer;
pub mod point;
pub mod render_params;
pub mod screen_point;
pub mod viewport;
