pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod dimensions;
pub mod pixel_buffer;
pub mod point;
