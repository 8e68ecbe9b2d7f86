// Domain layer - grid, rule and simulation engine
pub mod domain;

// Application layer - animation pacing and use cases
pub mod application;

// Ambient concerns
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Simulation, presets};
pub use application::{AnimationDriver, FrameScheduler, GameState, ManualScheduler, Playback, TickHandle};
pub use config::{Cli, LifeConfig};
pub use error::{ConfigError, LifeError};
