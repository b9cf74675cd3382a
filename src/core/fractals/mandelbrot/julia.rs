use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// `z ← z² + param`, starting from `z0`.
///
/// The constant added on every step is the user-picked parameter, so the
/// pixel only seeds the orbit.
#[must_use]
pub fn mandelbrot_julia_iterations(z0: Complex, param: Complex, max_iterations: u32) -> u32 {
    escape_time(z0, param, max_iterations, |real, imag| real * imag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::reference;
    use crate::core::fractals::mandelbrot::algorithm::mandelbrot_iterations;

    const MAX_ITERATIONS: u32 = 255;

    #[test]
    fn test_zero_param_unit_disc_is_interior() {
        assert_eq!(
            mandelbrot_julia_iterations(Complex::new(0.5, 0.5), Complex::ZERO, MAX_ITERATIONS),
            MAX_ITERATIONS
        );
    }

    #[test]
    fn test_zero_param_outside_unit_disc_escapes() {
        // 1.5² = 2.25 -> 5.0625 escapes after one step
        assert_eq!(
            mandelbrot_julia_iterations(Complex::new(1.5, 0.0), Complex::ZERO, MAX_ITERATIONS),
            1
        );
    }

    #[test]
    fn test_param_is_the_added_constant() {
        // Starting value and constant play different roles, so swapping them
        // changes the result: z0 = 0 with param 1 is 0 -> 1 -> 2 (escapes at 2),
        // while z0 = 1 with param 0 stays on the unit circle forever.
        let one = Complex::new(1.0, 0.0);

        assert_eq!(mandelbrot_julia_iterations(Complex::ZERO, one, MAX_ITERATIONS), 2);
        assert_eq!(mandelbrot_julia_iterations(one, Complex::ZERO, MAX_ITERATIONS), MAX_ITERATIONS);
    }

    #[test]
    fn test_param_equal_to_start_matches_mandelbrot() {
        for z0 in reference::sample_points() {
            assert_eq!(
                mandelbrot_julia_iterations(z0, z0, MAX_ITERATIONS),
                mandelbrot_iterations(z0, MAX_ITERATIONS)
            );
        }
    }

    #[test]
    fn test_matches_closed_form_iteration() {
        let param = Complex::new(-0.7, 0.27);

        for z0 in reference::sample_points() {
            let expected = reference::iterate(z0, MAX_ITERATIONS, |z| z * z + param);

            assert_eq!(mandelbrot_julia_iterations(z0, param, MAX_ITERATIONS), expected);
        }
    }
}
