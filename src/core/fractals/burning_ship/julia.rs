use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// `z ← (|re z| + i|im z|)² + param`, starting from `z0`.
#[must_use]
pub fn burning_ship_julia_iterations(z0: Complex, param: Complex, max_iterations: u32) -> u32 {
    escape_time(z0, param, max_iterations, |real, imag| (real * imag).abs())
}
