use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Shared escape-time loop for the quadratic families.
///
/// Each step is `z ← (re² - im²) + i·2·cross(re, im) + constant`, where
/// `cross` is `re·im` for the plain family and `|re·im|` for the burning
/// ship. The squares feed both the escape test and the next step.
#[inline]
pub(crate) fn escape_time<F>(z0: Complex, constant: Complex, max_iterations: u32, cross: F) -> u32
where
    F: Fn(f64, f64) -> f64,
{
    let mut z = z0;
    let mut real_sq = z.real * z.real;
    let mut imag_sq = z.imag * z.imag;
    let mut iterations = 0;

    while real_sq + imag_sq < ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        let product = cross(z.real, z.imag);

        z = Complex {
            real: real_sq - imag_sq + constant.real,
            imag: product + product + constant.imag,
        };
        real_sq = z.real * z.real;
        imag_sq = z.imag * z.imag;
        iterations += 1;
    }

    iterations
}
