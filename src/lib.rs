mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::ports::image_sink::{ImageSink, ImageSinkError};
pub use controllers::session::config::{
    ConfigError, DEFAULT_MAX_ITERATIONS, DEFAULT_PICTURES_DIR, DEFAULT_ZOOM_FACTOR, SessionConfig,
};
pub use controllers::session::controller::{SessionController, SessionError};
pub use controllers::session::events::{InputEvent, KeyCommand};
pub use controllers::session::state::SessionState;
pub use crate::core::actions::generate_frame::frame_request::FrameRequest;
pub use crate::core::actions::generate_frame::generate_frame::generate_frame;
pub use crate::core::actions::generate_frame::generate_frame_rayon::generate_frame_rayon;
pub use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::colour_maps::linear_palette::LinearPalette;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::dimensions::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, Dimensions, DimensionsError,
};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::kernel::Kernel;
pub use crate::core::util::display_strings::{format_complex, format_zoom_level};
pub use crate::core::viewport::transforms::{HorizontalEdge, ResizeEdges, VerticalEdge, ZoomDirection};
pub use crate::core::viewport::viewport::{Viewport, ViewportError};
pub use presenters::file::png::PngDirectorySink;
pub use storage::write_png::write_png;

#[cfg(feature = "gui")]
pub use input::gui::app::RunGuiCommand;
