use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// `z ← (|re z| + i|im z|)² + z0`, starting from `z0`.
#[must_use]
pub fn burning_ship_iterations(z0: Complex, max_iterations: u32) -> u32 {
    escape_time(z0, z0, max_iterations, |real, imag| (real * imag).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::reference;

    const MAX_ITERATIONS: u32 = 255;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(burning_ship_iterations(Complex::ZERO, MAX_ITERATIONS), MAX_ITERATIONS);
    }

    #[test]
    fn test_outside_radius_escapes_immediately() {
        assert_eq!(burning_ship_iterations(Complex::new(0.0, -2.5), MAX_ITERATIONS), 0);
    }

    #[test]
    fn test_folding_breaks_conjugate_symmetry() {
        // The plain Mandelbrot set is symmetric about the real axis, the ship is not.
        let above = Complex::new(-0.5, 0.6);
        let below = Complex::new(-0.5, -0.6);

        assert_ne!(
            burning_ship_iterations(above, MAX_ITERATIONS),
            burning_ship_iterations(below, MAX_ITERATIONS)
        );
    }

    #[test]
    fn test_matches_closed_form_iteration() {
        for z0 in reference::sample_points() {
            let expected = reference::iterate(z0, MAX_ITERATIONS, |z| {
                let folded = z.abs_components();
                folded * folded + z0
            });

            assert_eq!(burning_ship_iterations(z0, MAX_ITERATIONS), expected, "z0 = {:?}", z0);
        }
    }
}
