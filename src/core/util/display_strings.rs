use crate::core::data::complex::Complex;

const PLAIN_DECIMAL_LIMIT: f64 = 100.0;
const INTEGER_LIMIT: f64 = 1_000_000.0;

/// Formats a zoom level for display.
///
/// Below 100 it is a six-place decimal, up to a million a truncated integer,
/// and beyond that `<mantissa>e<exponent>` with a six-place mantissa.
#[must_use]
pub fn format_zoom_level(zoom_level: f64) -> String {
    if zoom_level > 0.0 && zoom_level < PLAIN_DECIMAL_LIMIT {
        return format!("{:.6}", zoom_level);
    }

    if (PLAIN_DECIMAL_LIMIT..INTEGER_LIMIT).contains(&zoom_level) {
        return format!("{}", zoom_level.trunc() as u64);
    }

    let exponent = zoom_level.log10().trunc() as i32;
    let mantissa = zoom_level / 10f64.powi(exponent);

    format!("{:.6}e{}", mantissa, exponent)
}

/// Formats a point as `<real> + <imag>i` or `<real> - <imag>i`.
#[must_use]
pub fn format_complex(point: Complex) -> String {
    let sign = if point.imag >= 0.0 { '+' } else { '-' };

    format!("{:.6} {} {:.6}i", point.real, sign, point.imag.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_level_below_one_hundred_is_decimal() {
        assert_eq!(format_zoom_level(1.0), "1.000000");
        assert_eq!(format_zoom_level(1.1), "1.100000");
        assert_eq!(format_zoom_level(0.5), "0.500000");
        assert_eq!(format_zoom_level(99.5), "99.500000");
    }

    #[test]
    fn test_zoom_level_between_one_hundred_and_a_million_is_integer() {
        assert_eq!(format_zoom_level(100.0), "100");
        assert_eq!(format_zoom_level(123.987), "123");
        assert_eq!(format_zoom_level(999_999.9), "999999");
    }

    #[test]
    fn test_zoom_level_above_a_million_is_scientific() {
        assert_eq!(format_zoom_level(2_500_000.0), "2.500000e6");
        assert_eq!(format_zoom_level(3.25e12), "3.250000e12");
    }

    #[test]
    fn test_format_complex_positive_imaginary() {
        assert_eq!(format_complex(Complex::new(-0.75, 0.1)), "-0.750000 + 0.100000i");
    }

    #[test]
    fn test_format_complex_negative_imaginary_uses_minus_and_magnitude() {
        assert_eq!(format_complex(Complex::new(0.25, -1.5)), "0.250000 - 1.500000i");
    }

    #[test]
    fn test_format_complex_zero_imaginary_is_plus() {
        assert_eq!(format_complex(Complex::ZERO), "0.000000 + 0.000000i");
    }
}
