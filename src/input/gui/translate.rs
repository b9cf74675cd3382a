use winit::dpi::PhysicalPosition;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::controllers::session::events::KeyCommand;
use crate::core::data::point::Point;

#[must_use]
pub fn key_command(key: KeyCode) -> Option<KeyCommand> {
    match key {
        KeyCode::KeyR => Some(KeyCommand::ResetView),
        KeyCode::KeyS => Some(KeyCommand::SaveImage),
        KeyCode::Digit1 => Some(KeyCommand::SelectMode(0)),
        KeyCode::Digit2 => Some(KeyCommand::SelectMode(1)),
        KeyCode::Digit3 => Some(KeyCommand::SelectMode(2)),
        KeyCode::Digit4 => Some(KeyCommand::SelectMode(3)),
        _ => None,
    }
}

/// Vertical wheel movement, positive away from the user.
#[must_use]
pub fn scroll_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

#[must_use]
pub fn cursor_point(position: PhysicalPosition<f64>) -> Point {
    Point {
        x: position.x.floor() as i32,
        y: position.y.floor() as i32,
    }
}

#[must_use]
pub fn window_point(position: PhysicalPosition<i32>) -> Point {
    Point {
        x: position.x,
        y: position.y,
    }
}
