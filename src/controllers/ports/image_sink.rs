use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum ImageSinkError {
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for ImageSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ImageSinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
        }
    }
}

pub trait ImageSink {
    /// Stores a frame and returns where it went. `Ok(None)` means the sink
    /// was unavailable and the frame was dropped.
    fn save(&mut self, buffer: &PixelBuffer) -> Result<Option<PathBuf>, ImageSinkError>;
}
