use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ResetView,
    SaveImage,
    SelectMode(u32),
}

/// Discrete input delivered by whatever front end drives the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Positive `delta` zooms in, negative zooms out.
    Scrolled { pointer: Point, delta: f64 },
    Clicked { pointer: Point },
    Key(KeyCommand),
    /// New inner size plus the window's outer position, used to tell which
    /// edges were dragged.
    Resized {
        width: u32,
        height: u32,
        window_position: Point,
    },
    Moved { window_position: Point },
}
