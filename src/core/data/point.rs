/// A position in pixel space, origin top-left, y growing downwards.
///
/// Signed so pointer positions outside the window are representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
