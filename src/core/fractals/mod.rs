pub mod complex_map;
pub mod escape;
pub mod escape_algorithm;
pub mod kernel_source;
pub mod variant;
