use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// `(n, 2n, 3n)` with every channel wrapped to eight bits, fully opaque.
///
/// Counts above 255 are truncated the same way, which is what produces the
/// repeating bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearPalette;

impl ColourMap for LinearPalette {
    fn map(&self, iterations: u32) -> Colour {
        let base = iterations as u8;

        Colour::opaque(base, base.wrapping_mul(2), base.wrapping_mul(3))
    }

    fn display_name(&self) -> &str {
        "Linear"
    }
}
