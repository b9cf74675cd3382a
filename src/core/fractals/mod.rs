pub mod burning_ship;
pub(crate) mod escape_time;
pub mod fractal_kinds;
pub mod kernel;
pub mod mandelbrot;
