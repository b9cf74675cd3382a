use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// `z ← z² + z0`, starting from `z0`.
#[must_use]
pub fn mandelbrot_iterations(z0: Complex, max_iterations: u32) -> u32 {
    escape_time(z0, z0, max_iterations, |real, imag| real * imag)
}
