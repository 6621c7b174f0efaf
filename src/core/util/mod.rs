pub mod pixel_to_screen_coords;
