use thiserror::Error;

/// Errors raised by the simulation and animation layers.
///
/// Only caller input can fail: a step over a valid grid is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("rate must be at least 1 step per second, got {0}")]
    InvalidRate(u32),

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("cell size must be a positive number of pixels, got {0}")]
    InvalidCellSize(f32),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Errors from loading a `life.toml` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] LifeError),
}
