#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    MandelbrotJulia,
    BurningShip,
    BurningShipJulia,
}

impl FractalKind {
    /// Ordered by mode index.
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::MandelbrotJulia,
        Self::BurningShip,
        Self::BurningShipJulia,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::MandelbrotJulia => "Mandelbrot Julia",
            Self::BurningShip => "Burning Ship",
            Self::BurningShipJulia => "Burning Ship Julia",
        }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Mandelbrot => 0,
            Self::MandelbrotJulia => 1,
            Self::BurningShip => 2,
            Self::BurningShipJulia => 3,
        }
    }

    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub const fn is_julia(self) -> bool {
        matches!(self, Self::MandelbrotJulia | Self::BurningShipJulia)
    }
}
