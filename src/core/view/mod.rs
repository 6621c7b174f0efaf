pub mod camera;
pub mod presets;
