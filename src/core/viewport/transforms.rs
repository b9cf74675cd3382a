use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive scroll zooms in, negative zooms out, and a zero delta
    /// carries no direction.
    #[must_use]
    pub fn from_scroll_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// The vertical window edge that moved during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalEdge {
    Left,
    #[default]
    Right,
}

/// The horizontal window edge that moved during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalEdge {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeEdges {
    pub horizontal: HorizontalEdge,
    pub vertical: VerticalEdge,
}

impl ResizeEdges {
    /// Infers the dragged edges from the window's outer position. A window
    /// that kept its x position was resized from the right, one that moved
    /// was resized from the left; the same for y with bottom and top.
    #[must_use]
    pub fn from_window_positions(previous: Point, current: Point) -> Self {
        Self {
            horizontal: if previous.x == current.x {
                HorizontalEdge::Right
            } else {
                HorizontalEdge::Left
            },
            vertical: if previous.y == current.y {
                VerticalEdge::Bottom
            } else {
                VerticalEdge::Top
            },
        }
    }
}
