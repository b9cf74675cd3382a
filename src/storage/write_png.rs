use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ColorType, ImageFormat, ImageResult};
use std::path::Path;

/// Encodes an RGBA frame as an 8-bit-per-channel PNG.
pub fn write_png(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> ImageResult<()> {
    let dimensions = buffer.dimensions();

    image::save_buffer_with_format(
        filepath,
        buffer.buffer(),
        dimensions.width(),
        dimensions.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )
}
