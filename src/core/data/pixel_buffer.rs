use crate::core::data::colour::Colour;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn dimensions_to_buffer_size(dimensions: Dimensions) -> usize {
    dimensions.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        dimensions: Dimensions,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGBA data but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, dimensions } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x,
                    pixel.y,
                    dimensions.width(),
                    dimensions.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 frame. Pixel `(x, y)` starts at byte `4 * (width * y + x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions_to_buffer_size(dimensions)],
        }
    }

    pub fn from_data(
        dimensions: Dimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = dimensions_to_buffer_size(dimensions);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { dimensions, buffer })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.dimensions.width() as usize * BYTES_PER_PIXEL
    }

    /// Mutable access to the raw bytes for row-sliced writers.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                dimensions: self.dimensions,
            })?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        let x = u32::try_from(pixel.x).ok()?;
        let y = u32::try_from(pixel.y).ok()?;

        if x >= self.dimensions.width() || y >= self.dimensions.height() {
            return None;
        }

        Some((y as usize * self.dimensions.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
