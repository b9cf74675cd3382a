use std::error::Error;
use std::fmt;

/// Largest accepted extent on either axis. Keeps every pixel coordinate
/// representable as a [`Point`](crate::core::data::point::Point).
pub const MAX_EXTENT: u32 = i32::MAX as u32;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionsError {
    ZeroSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for DimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "pixel dimensions must be non-zero: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "pixel dimensions {}x{} exceed the maximum extent of {}",
                    width, height, MAX_EXTENT
                )
            }
        }
    }
}

impl Error for DimensionsError {}

/// Width and height of a frame in pixels. Both are always non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionsError> {
        if width == 0 || height == 0 {
            return Err(DimensionsError::ZeroSize { width, height });
        }

        if width > MAX_EXTENT || height > MAX_EXTENT {
            return Err(DimensionsError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
