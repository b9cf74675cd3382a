use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::algorithm::burning_ship_iterations;
use crate::core::fractals::burning_ship::julia::burning_ship_julia_iterations;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::algorithm::mandelbrot_iterations;
use crate::core::fractals::mandelbrot::julia::mandelbrot_julia_iterations;

/// A selected escape-time kernel with its Julia parameter bound in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    Mandelbrot,
    MandelbrotJulia { param: Complex },
    BurningShip,
    BurningShipJulia { param: Complex },
}

impl Kernel {
    /// Picks the kernel for a raw mode index. Indices outside `0..=3` select
    /// nothing, and callers keep whatever frame they already have.
    #[must_use]
    pub fn select(mode: u32, julia_param: Complex) -> Option<Self> {
        FractalKind::from_index(mode).map(|kind| Self::for_kind(kind, julia_param))
    }

    #[must_use]
    pub fn for_kind(kind: FractalKind, julia_param: Complex) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot,
            FractalKind::MandelbrotJulia => Self::MandelbrotJulia { param: julia_param },
            FractalKind::BurningShip => Self::BurningShip,
            FractalKind::BurningShipJulia => Self::BurningShipJulia { param: julia_param },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::MandelbrotJulia { .. } => FractalKind::MandelbrotJulia,
            Self::BurningShip => FractalKind::BurningShip,
            Self::BurningShipJulia { .. } => FractalKind::BurningShipJulia,
        }
    }
}

impl FractalAlgorithm for Kernel {
    fn compute(&self, z0: Complex, max_iterations: u32) -> u32 {
        match *self {
            Self::Mandelbrot => mandelbrot_iterations(z0, max_iterations),
            Self::MandelbrotJulia { param } => mandelbrot_julia_iterations(z0, param, max_iterations),
            Self::BurningShip => burning_ship_iterations(z0, max_iterations),
            Self::BurningShipJulia { param } => {
                burning_ship_julia_iterations(z0, param, max_iterations)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_binds_param_for_julia_modes_only() {
        let param = Complex::new(-0.4, 0.6);

        assert_eq!(Kernel::select(0, param), Some(Kernel::Mandelbrot));
        assert_eq!(Kernel::select(1, param), Some(Kernel::MandelbrotJulia { param }));
        assert_eq!(Kernel::select(2, param), Some(Kernel::BurningShip));
        assert_eq!(Kernel::select(3, param), Some(Kernel::BurningShipJulia { param }));
    }

    #[test]
    fn test_select_out_of_range_is_none() {
        assert_eq!(Kernel::select(4, Complex::ZERO), None);
        assert_eq!(Kernel::select(42, Complex::ZERO), None);
    }

    #[test]
    fn test_kind_round_trips() {
        for &kind in FractalKind::ALL {
            assert_eq!(Kernel::for_kind(kind, Complex::ZERO).kind(), kind);
        }
    }

    #[test]
    fn test_compute_dispatches_to_matching_kernel() {
        let z0 = Complex::new(-0.5, -0.6);
        let param = Complex::new(0.3, -0.1);

        assert_eq!(Kernel::Mandelbrot.compute(z0, 100), mandelbrot_iterations(z0, 100));
        assert_eq!(
            Kernel::MandelbrotJulia { param }.compute(z0, 100),
            mandelbrot_julia_iterations(z0, param, 100)
        );
        assert_eq!(Kernel::BurningShip.compute(z0, 100), burning_ship_iterations(z0, 100));
        assert_eq!(
            Kernel::BurningShipJulia { param }.compute(z0, 100),
            burning_ship_julia_iterations(z0, param, 100)
        );
    }

    #[test]
    fn test_every_kernel_stays_within_bound() {
        let z0 = Complex::ZERO;

        for &kind in FractalKind::ALL {
            assert_eq!(Kernel::for_kind(kind, Complex::ZERO).compute(z0, 37), 37);
        }
    }
}
