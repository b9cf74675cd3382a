use crate::core::data::complex::Complex;
use crate::core::data::dimensions::{Dimensions, DimensionsError};
use crate::core::viewport::viewport::is_valid_zoom_factor;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;
pub const DEFAULT_PICTURES_DIR: &str = "./pictures";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroMaxIterations,
    InvalidZoomFactor { factor: f64 },
    Dimensions(DimensionsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be finite and greater than one: {}", factor)
            }
            Self::Dimensions(err) => write!(f, "invalid dimensions: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dimensions(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DimensionsError> for ConfigError {
    fn from(err: DimensionsError) -> Self {
        Self::Dimensions(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub dimensions: Dimensions,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub pictures_dir: PathBuf,
    pub initial_mode: u32,
    pub julia_param: Complex,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            pictures_dir: PathBuf::from(DEFAULT_PICTURES_DIR),
            initial_mode: 0,
            julia_param: Complex::ZERO,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !is_valid_zoom_factor(self.zoom_factor) {
            return Err(ConfigError::InvalidZoomFactor {
                factor: self.zoom_factor,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();

        assert_eq!(config.dimensions, Dimensions::new(800, 800).unwrap());
        assert_eq!(config.max_iterations, 255);
        assert_eq!(config.zoom_factor, 1.1);
        assert_eq!(config.pictures_dir, PathBuf::from("./pictures"));
        assert_eq!(config.initial_mode, 0);
        assert_eq!(config.julia_param, Complex::ZERO);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let config = SessionConfig {
            max_iterations: 0,
            ..SessionConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_zoom_factor_must_magnify() {
        for factor in [1.0, 0.9, f64::INFINITY] {
            let config = SessionConfig {
                zoom_factor: factor,
                ..SessionConfig::default()
            };

            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidZoomFactor { factor })
            );
        }
    }
}
