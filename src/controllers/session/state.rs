use std::time::Instant;

use crate::controllers::session::config::{ConfigError, SessionConfig};
use crate::core::actions::generate_frame::frame_request::FrameRequest;
use crate::core::actions::generate_frame::generate_frame_rayon::generate_frame_rayon;
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::kernel::Kernel;
use crate::core::util::display_strings::{format_complex, format_zoom_level};
use crate::core::viewport::transforms::{ResizeEdges, ZoomDirection};
use crate::core::viewport::viewport::{Viewport, ViewportError};

/// Everything a frame is a function of, plus the last frame produced.
///
/// Mutators raise `needs_regeneration` only when they change something the
/// frame depends on, and `regenerate_if_needed` is the single place frames
/// are produced.
#[derive(Debug)]
pub struct SessionState {
    viewport: Viewport,
    mode: u32,
    julia_param: Complex,
    max_iterations: u32,
    zoom_factor: f64,
    window_position: Option<Point>,
    needs_regeneration: bool,
    frame: Option<PixelBuffer>,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            viewport: Viewport::new(config.dimensions),
            mode: config.initial_mode,
            julia_param: config.julia_param,
            max_iterations: config.max_iterations,
            zoom_factor: config.zoom_factor,
            window_position: None,
            needs_regeneration: true,
            frame: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[must_use]
    pub fn active_kind(&self) -> Option<FractalKind> {
        FractalKind::from_index(self.mode)
    }

    #[must_use]
    pub fn julia_param(&self) -> Complex {
        self.julia_param
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn needs_regeneration(&self) -> bool {
        self.needs_regeneration
    }

    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    pub fn select_mode(&mut self, mode: u32) {
        if mode != self.mode {
            self.mode = mode;
            self.needs_regeneration = true;
        }
    }

    /// Sets the Julia parameter to the plane point under `pointer`. The view
    /// itself does not move.
    pub fn pick_julia_param(&mut self, pointer: Point) {
        let param = self.viewport.pixel_to_complex(pointer);

        if param == self.julia_param {
            return;
        }

        self.julia_param = param;

        if self.active_kind().is_some_and(FractalKind::is_julia) {
            self.needs_regeneration = true;
        }
    }

    pub fn scroll(&mut self, pointer: Point, delta: f64) -> Result<(), ViewportError> {
        let Some(direction) = ZoomDirection::from_scroll_delta(delta) else {
            return Ok(());
        };

        self.viewport.zoom(pointer, direction, self.zoom_factor)?;
        self.needs_regeneration = true;

        Ok(())
    }

    pub fn resize(
        &mut self,
        dimensions: Dimensions,
        edges: ResizeEdges,
    ) -> Result<(), ViewportError> {
        if dimensions == self.viewport.dimensions() {
            return Ok(());
        }

        self.viewport.resize(dimensions, edges)?;
        self.needs_regeneration = true;

        Ok(())
    }

    /// Resizes using the window's outer position to decide which edges
    /// moved. Without a previous position the bottom-right edges are assumed.
    pub fn resize_window(
        &mut self,
        dimensions: Dimensions,
        window_position: Point,
    ) -> Result<(), ViewportError> {
        let edges = self
            .window_position
            .map(|previous| ResizeEdges::from_window_positions(previous, window_position))
            .unwrap_or_default();

        self.resize(dimensions, edges)?;
        self.window_position = Some(window_position);

        Ok(())
    }

    pub fn move_window(&mut self, window_position: Point) {
        self.window_position = Some(window_position);
    }

    pub fn reset(&mut self) {
        self.viewport.reset();
        self.needs_regeneration = true;
    }

    /// Snapshot of the current state, or `None` when the mode selects no
    /// fractal.
    #[must_use]
    pub fn frame_request(&self) -> Option<FrameRequest<Kernel>> {
        let algorithm = Kernel::select(self.mode, self.julia_param)?;

        Some(FrameRequest {
            dimensions: self.viewport.dimensions(),
            region: self.viewport.region(),
            max_iterations: self.max_iterations,
            algorithm,
        })
    }

    /// Produces a new frame when something it depends on changed. Returns
    /// whether the frame was replaced.
    pub fn regenerate_if_needed<CMap>(&mut self, colour_map: &CMap) -> bool
    where
        CMap: ColourMap + Sync,
    {
        if !self.needs_regeneration {
            return false;
        }

        self.needs_regeneration = false;

        let Some(request) = self.frame_request() else {
            log::debug!("mode {} selects no fractal, keeping previous frame", self.mode);
            return false;
        };

        let start = Instant::now();
        let frame = generate_frame_rayon(&request, colour_map);

        log::debug!(
            "generated {} {}x{} in {:?}",
            request.algorithm.kind().display_name(),
            request.dimensions.width(),
            request.dimensions.height(),
            start.elapsed()
        );

        self.frame = Some(frame);
        true
    }

    #[must_use]
    pub fn zoom_label(&self) -> String {
        format_zoom_level(self.viewport.zoom_level())
    }

    #[must_use]
    pub fn center_label(&self) -> String {
        format_complex(self.viewport.center())
    }

    #[must_use]
    pub fn julia_label(&self) -> String {
        format_complex(self.julia_param)
    }

    /// One-line summary of the view for a title bar or log line.
    #[must_use]
    pub fn status_line(&self) -> String {
        let name = self
            .active_kind()
            .map_or("No fractal", FractalKind::display_name);
        let mut status = format!(
            "{} | zoom {} | center {}",
            name,
            self.zoom_label(),
            self.center_label()
        );

        if self.active_kind().is_some_and(FractalKind::is_julia) {
            status.push_str(&format!(" | c = {}", self.julia_label()));
        }

        status
    }
}
