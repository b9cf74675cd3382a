use crate::controllers::ports::image_sink::{ImageSink, ImageSinkError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_png::write_png;
use std::fs;
use std::path::{Path, PathBuf};

#[must_use]
pub fn image_file_name(index: u64) -> String {
    format!("image_{}.png", index)
}

/// Writes frames as `image_<n>.png` into a directory.
///
/// `n` counts up from the last file this sink wrote, skipping names that
/// already exist, so earlier runs are never overwritten.
#[derive(Debug)]
pub struct PngDirectorySink {
    directory: PathBuf,
    next_index: u64,
}

impl PngDirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next_index: 0,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn next_free_path(&self) -> (u64, PathBuf) {
        let mut index = self.next_index;

        loop {
            let candidate = self.directory.join(image_file_name(index));

            if !candidate.exists() {
                return (index, candidate);
            }

            index += 1;
        }
    }
}

impl ImageSink for PngDirectorySink {
    fn save(&mut self, buffer: &PixelBuffer) -> Result<Option<PathBuf>, ImageSinkError> {
        if let Err(err) = fs::read_dir(&self.directory) {
            log::warn!(
                "skipping save, {} is not accessible: {}",
                self.directory.display(),
                err
            );
            return Ok(None);
        }

        let (index, path) = self.next_free_path();

        write_png(buffer, &path).map_err(|source| ImageSinkError::Write {
            path: path.clone(),
            source,
        })?;
        self.next_index = index + 1;

        log::info!("saved {}", path.display());

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::dimensions::Dimensions;

    fn frame() -> PixelBuffer {
        PixelBuffer::new(Dimensions::new(4, 4).unwrap())
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name(0), "image_0.png");
        assert_eq!(image_file_name(17), "image_17.png");
    }

    #[test]
    fn test_saves_are_numbered_sequentially() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngDirectorySink::new(dir.path());

        let first = sink.save(&frame()).unwrap().unwrap();
        let second = sink.save(&frame()).unwrap().unwrap();

        assert_eq!(first, dir.path().join("image_0.png"));
        assert_eq!(second, dir.path().join("image_1.png"));
        assert!(first.is_file() && second.is_file());
    }

    #[test]
    fn test_existing_files_are_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("image_0.png"), b"earlier run").unwrap();
        fs::write(dir.path().join("image_1.png"), b"earlier run").unwrap();
        fs::write(dir.path().join("notes.txt"), b"unrelated").unwrap();
        let mut sink = PngDirectorySink::new(dir.path());

        let path = sink.save(&frame()).unwrap().unwrap();

        assert_eq!(path, dir.path().join("image_2.png"));
        assert_eq!(fs::read(dir.path().join("image_0.png")).unwrap(), b"earlier run");
    }

    #[test]
    fn test_gaps_are_filled_after_the_counter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("image_1.png"), b"earlier run").unwrap();
        let mut sink = PngDirectorySink::new(dir.path());

        let first = sink.save(&frame()).unwrap().unwrap();
        let second = sink.save(&frame()).unwrap().unwrap();

        assert_eq!(first, dir.path().join("image_0.png"));
        assert_eq!(second, dir.path().join("image_2.png"));
    }

    #[test]
    fn test_missing_directory_skips_save() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("pictures");
        let mut sink = PngDirectorySink::new(&missing);

        let result = sink.save(&frame()).unwrap();

        assert_eq!(result, None);
        assert!(!missing.exists());
    }
}
