use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::application::{DEFAULT_RATE, validate_rate};
use crate::domain::{DEFAULT_DENSITY, presets, validate_density, validate_size};
use crate::error::{ConfigError, LifeError};

pub const DEFAULT_GRID_SIZE: usize = 30;
pub const DEFAULT_CELL_SIZE: f32 = 15.0;

/// Recognized options, in `life.toml` or on the command line
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Target generations per second while running
    pub rate: u32,
    /// Probability of a cell starting alive when randomizing
    pub density: f64,
    /// Preferred on-screen cell size in pixels
    pub cell_size: f32,
    /// Seed for the random source; OS entropy when absent
    pub seed: Option<u64>,
    /// Preset pattern stamped at the centre on startup
    pub pattern: Option<String>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            rate: DEFAULT_RATE,
            density: DEFAULT_DENSITY,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
            pattern: None,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults, overlaid by the config file (if any), overlaid by flags
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = cli.apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would otherwise reach the step loop
    pub fn validate(&self) -> Result<(), LifeError> {
        validate_size(self.grid_size)?;
        validate_rate(self.rate)?;
        validate_density(self.density)?;
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(LifeError::InvalidCellSize(self.cell_size));
        }
        if let Some(name) = &self.pattern {
            if presets::by_name(name).is_none() {
                return Err(LifeError::UnknownPattern(name.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "life_canvas", about = "Conway's Game of Life on a finite grid")]
pub struct Cli {
    /// TOML file with any of the recognized options
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Generations per second
    #[arg(short, long)]
    pub rate: Option<u32>,

    /// Alive probability used by randomize
    #[arg(short, long)]
    pub density: Option<f64>,

    /// Seed for reproducible randomize
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting pattern (glider, blinker, toad, beacon, lwss, r-pentomino, block)
    #[arg(short, long)]
    pub pattern: Option<String>,
}

impl Cli {
    fn apply(&self, mut config: LifeConfig) -> LifeConfig {
        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if let Some(rate) = self.rate {
            config.rate = rate;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.pattern.is_some() {
            config.pattern = self.pattern.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.rate, 10);
        assert_eq!(config.density, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LifeConfig::from_toml_str("grid_size = 50\nseed = 7\n").unwrap();
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rate, DEFAULT_RATE);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            ("grid_size = 0", LifeError::InvalidGridSize(0)),
            ("rate = 0", LifeError::InvalidRate(0)),
            ("density = 1.5", LifeError::InvalidDensity(1.5)),
            ("cell_size = 0.0", LifeError::InvalidCellSize(0.0)),
            ("pattern = \"gun\"", LifeError::UnknownPattern("gun".into())),
        ];
        for (toml, expected) in cases {
            match LifeConfig::from_toml_str(toml) {
                Err(ConfigError::Invalid(err)) => assert_eq!(err, expected, "{toml}"),
                other => panic!("{toml}: expected invalid config, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            LifeConfig::from_toml_str("grid_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            LifeConfig::load(Path::new("/nonexistent/life.toml")),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::try_parse_from(["life_canvas", "--size", "64", "-r", "25", "--pattern", "glider"]).unwrap();
        let config = LifeConfig::resolve(&cli).unwrap();
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.rate, 25);
        assert_eq!(config.pattern.as_deref(), Some("glider"));
        assert_eq!(config.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_cli_rejects_zero_rate() {
        let cli = Cli::try_parse_from(["life_canvas", "--rate", "0"]).unwrap();
        assert!(matches!(
            LifeConfig::resolve(&cli),
            Err(ConfigError::Invalid(LifeError::InvalidRate(0)))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = LifeConfig {
            seed: Some(11),
            pattern: Some("toad".into()),
            ..LifeConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(LifeConfig::from_toml_str(&text).unwrap(), config);
    }
}
