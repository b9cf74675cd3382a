use rayon::prelude::*;

use crate::core::actions::generate_frame::frame_request::FrameRequest;
use crate::core::actions::generate_frame::generate_frame::render_row;
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Generates a frame with rows spread across rayon's thread pool.
///
/// Every worker owns a disjoint row slice of the output, so the only
/// synchronisation is the implicit join when the iterator completes.
pub fn generate_frame_rayon<Alg, CMap>(
    request: &FrameRequest<Alg>,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    let mut pixel_buffer = PixelBuffer::new(request.dimensions);
    let stride = pixel_buffer.row_stride();

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| render_row(request, colour_map, y, row));

    pixel_buffer
}
