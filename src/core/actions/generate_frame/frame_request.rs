use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::dimensions::Dimensions;

/// Everything a frame depends on, captured after all viewport transforms
/// have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest<Alg: FractalAlgorithm> {
    pub dimensions: Dimensions,
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub algorithm: Alg,
}
