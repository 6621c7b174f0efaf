pub mod palette;
pub mod policy;
pub mod presets;
