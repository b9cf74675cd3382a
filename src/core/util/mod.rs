pub mod display_strings;
pub mod pixel_to_complex_coords;
