use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;

/// Plane distance covered by one pixel along each axis.
#[must_use]
pub fn plane_delta(dimensions: Dimensions, complex_rect: ComplexRect) -> Complex {
    Complex {
        real: complex_rect.width() / f64::from(dimensions.width()),
        imag: complex_rect.height() / f64::from(dimensions.height()),
    }
}

/// Maps a pixel to the plane. Pixel `(0, 0)` lands exactly on the top-left
/// corner and `(width, height)` on the bottom-right one. Positions outside
/// the frame extrapolate linearly.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    dimensions: Dimensions,
    complex_rect: ComplexRect,
) -> Complex {
    let delta = plane_delta(dimensions, complex_rect);
    let top_left = complex_rect.top_left();

    Complex {
        real: top_left.real + f64::from(pixel_position.x) * delta.real,
        imag: top_left.imag - f64::from(pixel_position.y) * delta.imag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn canonical_rect() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, 2.0), Complex::new(2.0, -2.0)).unwrap()
    }

    #[test]
    fn test_plane_delta() {
        let dimensions = Dimensions::new(800, 400).unwrap();

        let delta = plane_delta(dimensions, canonical_rect());

        assert_eq!(delta, Complex::new(0.005, 0.01));
    }

    #[test]
    fn test_pixel_to_complex_top_left_is_exact() {
        let rect = ComplexRect::new(Complex::new(-0.7435, 0.1314), Complex::new(-0.7431, 0.1311))
            .unwrap();
        let dimensions = Dimensions::new(640, 480).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, dimensions, rect);

        assert_eq!(result, rect.top_left());
    }

    #[test]
    fn test_pixel_to_complex_far_corner_is_bottom_right() {
        let rect = ComplexRect::new(Complex::new(-2.5, 1.0), Complex::new(1.0, -1.0)).unwrap();
        let dimensions = Dimensions::new(700, 300).unwrap();

        let result = pixel_to_complex_coords(Point { x: 700, y: 300 }, dimensions, rect);

        assert!((result.real - rect.bottom_right().real).abs() < EPSILON);
        assert!((result.imag - rect.bottom_right().imag).abs() < EPSILON);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let dimensions = Dimensions::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, dimensions, canonical_rect());

        assert!(result.real.abs() < EPSILON);
        assert!(result.imag.abs() < EPSILON);
    }

    #[test]
    fn test_pixel_outside_frame_extrapolates() {
        let dimensions = Dimensions::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: -1, y: 5 }, dimensions, canonical_rect());

        assert_eq!(result, Complex::new(-3.0, -3.0));
    }
}
