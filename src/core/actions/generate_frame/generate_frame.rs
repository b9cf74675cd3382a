use crate::core::actions::generate_frame::frame_request::FrameRequest;
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Generates a frame on the calling thread.
pub fn generate_frame<Alg, CMap>(request: &FrameRequest<Alg>, colour_map: &CMap) -> PixelBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    let mut pixel_buffer = PixelBuffer::new(request.dimensions);
    let stride = pixel_buffer.row_stride();

    for (y, row) in pixel_buffer.buffer_mut().chunks_exact_mut(stride).enumerate() {
        render_row(request, colour_map, y, row);
    }

    pixel_buffer
}

/// Fills one row of RGBA bytes. `row` must be exactly one stride long.
pub(crate) fn render_row<Alg, CMap>(
    request: &FrameRequest<Alg>,
    colour_map: &CMap,
    y: usize,
    row: &mut [u8],
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    // Dimensions caps both extents at i32::MAX.
    let y = y as i32;

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let z0 = pixel_to_complex_coords(
            Point { x: x as i32, y },
            request.dimensions,
            request.region,
        );
        let iterations = request.algorithm.compute(z0, request.max_iterations);

        pixel.copy_from_slice(&colour_map.map(iterations).to_rgba());
    }
}
