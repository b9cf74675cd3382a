use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, plane_delta};
use crate::core::viewport::transforms::{HorizontalEdge, ResizeEdges, VerticalEdge, ZoomDirection};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoomFactor { factor: f64 },
    DegenerateRegion(ComplexRectError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be finite and greater than one: {}", factor)
            }
            Self::DegenerateRegion(err) => {
                write!(f, "transform would leave a degenerate view: {}", err)
            }
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidZoomFactor { .. } => None,
            Self::DegenerateRegion(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::DegenerateRegion(err)
    }
}

#[must_use]
pub fn is_valid_zoom_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 1.0
}

/// The visible region of the plane and the frame it is mapped onto.
///
/// Transforms either apply completely or return an error and leave the
/// viewport untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    dimensions: Dimensions,
    zoom_level: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_region(ComplexRect::CANONICAL, dimensions)
    }

    #[must_use]
    pub fn with_region(region: ComplexRect, dimensions: Dimensions) -> Self {
        Self {
            region,
            dimensions,
            zoom_level: 1.0,
        }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.region.top_left()
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.region.bottom_right()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.region.center()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Display-only magnification relative to the canonical view.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn plane_delta(&self) -> Complex {
        plane_delta(self.dimensions, self.region)
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        pixel_to_complex_coords(pixel, self.dimensions, self.region)
    }

    /// Scales the half-extents by `factor` and recentres on the plane point
    /// that was under `pointer` before the zoom.
    pub fn zoom(
        &mut self,
        pointer: Point,
        direction: ZoomDirection,
        factor: f64,
    ) -> Result<(), ViewportError> {
        if !is_valid_zoom_factor(factor) {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let current_center = self.region.center();
        let half_extent = Complex {
            real: current_center.real - self.top_left().real,
            imag: current_center.imag - self.bottom_right().imag,
        };

        let (half_extent, zoom_level) = match direction {
            ZoomDirection::In => (half_extent.scale(1.0 / factor), self.zoom_level * factor),
            ZoomDirection::Out => (half_extent.scale(factor), self.zoom_level / factor),
        };

        let center = self.pixel_to_complex(pointer);
        let region = ComplexRect::new(
            Complex {
                real: center.real - half_extent.real,
                imag: center.imag + half_extent.imag,
            },
            Complex {
                real: center.real + half_extent.real,
                imag: center.imag - half_extent.imag,
            },
        )?;

        self.region = region;
        self.zoom_level = zoom_level;

        log::debug!(
            "zoom {:?} at ({}, {}), level {}",
            direction,
            pointer.x,
            pointer.y,
            zoom_level
        );

        Ok(())
    }

    /// Adapts the region to new frame dimensions. The plane coordinate of
    /// the stationary edges is kept exactly and each moving edge shifts by
    /// one pixel delta per pixel of growth, so the scale is unchanged.
    pub fn resize(
        &mut self,
        dimensions: Dimensions,
        edges: ResizeEdges,
    ) -> Result<(), ViewportError> {
        let delta = self.plane_delta();
        let grow_x = f64::from(dimensions.width()) - f64::from(self.dimensions.width());
        let grow_y = f64::from(dimensions.height()) - f64::from(self.dimensions.height());

        let mut top_left = self.top_left();
        let mut bottom_right = self.bottom_right();

        match edges.horizontal {
            HorizontalEdge::Right => bottom_right.real += delta.real * grow_x,
            HorizontalEdge::Left => top_left.real -= delta.real * grow_x,
        }

        match edges.vertical {
            VerticalEdge::Bottom => bottom_right.imag -= delta.imag * grow_y,
            VerticalEdge::Top => top_left.imag += delta.imag * grow_y,
        }

        self.region = ComplexRect::new(top_left, bottom_right)?;
        self.dimensions = dimensions;

        log::debug!(
            "resize to {}x{} moving {:?}/{:?}",
            dimensions.width(),
            dimensions.height(),
            edges.horizontal,
            edges.vertical
        );

        Ok(())
    }

    /// Back to the canonical region at zoom level one. Dimensions are kept.
    pub fn reset(&mut self) {
        self.region = ComplexRect::CANONICAL;
        self.zoom_level = 1.0;
    }
}
