use crate::core::data::complex::Complex;

/// An escape-time iteration: plane point in, iteration count in
/// `0..=max_iterations` out.
pub trait FractalAlgorithm {
    fn compute(&self, z0: Complex, max_iterations: u32) -> u32;
}
