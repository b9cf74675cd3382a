use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::controllers::ports::image_sink::{ImageSink, ImageSinkError};
use crate::controllers::session::config::{ConfigError, SessionConfig};
use crate::controllers::session::events::{InputEvent, KeyCommand};
use crate::controllers::session::state::SessionState;
use crate::core::colour_maps::linear_palette::LinearPalette;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::viewport::viewport::ViewportError;

#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    Viewport(ViewportError),
    Sink(ImageSinkError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Sink(err) => write!(f, "image export error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ImageSinkError> for SessionError {
    fn from(err: ImageSinkError) -> Self {
        Self::Sink(err)
    }
}

/// Drives a [`SessionState`] from input events and exports its frames.
pub struct SessionController<S: ImageSink> {
    state: SessionState,
    colour_map: LinearPalette,
    sink: S,
}

impl<S: ImageSink> SessionController<S> {
    pub fn new(config: &SessionConfig, sink: S) -> Result<Self, SessionError> {
        Ok(Self {
            state: SessionState::new(config)?,
            colour_map: LinearPalette,
            sink,
        })
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.state.frame()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SessionError> {
        log::trace!("input {:?}", event);

        match event {
            InputEvent::Scrolled { pointer, delta } => self.state.scroll(pointer, delta)?,
            InputEvent::Clicked { pointer } => self.state.pick_julia_param(pointer),
            InputEvent::Key(KeyCommand::ResetView) => self.state.reset(),
            InputEvent::Key(KeyCommand::SelectMode(mode)) => self.state.select_mode(mode),
            InputEvent::Key(KeyCommand::SaveImage) => {
                self.save()?;
            }
            InputEvent::Resized {
                width,
                height,
                window_position,
            } => match Dimensions::new(width, height) {
                Ok(dimensions) => self.state.resize_window(dimensions, window_position)?,
                // Minimised windows report a zero size; keep the last frame.
                Err(err) => log::debug!("ignoring resize: {}", err),
            },
            InputEvent::Moved { window_position } => self.state.move_window(window_position),
        }

        Ok(())
    }

    pub fn regenerate_if_needed(&mut self) -> bool {
        self.state.regenerate_if_needed(&self.colour_map)
    }

    /// Exports the latest frame. `Ok(None)` when there is no frame yet or the
    /// sink skipped it.
    pub fn save(&mut self) -> Result<Option<PathBuf>, SessionError> {
        let Some(frame) = self.state.frame() else {
            log::warn!("nothing to save, no frame has been generated");
            return Ok(None);
        };

        Ok(self.sink.save(frame)?)
    }
}
