use tracing::{info, warn};

use super::animation::AnimationDriver;
use super::scheduler::FrameScheduler;
use crate::config::LifeConfig;
use crate::domain::{Grid, Pattern, Simulation, presets, validate_size};
use crate::error::LifeError;

/// GameState orchestrates the simulation.
/// This is the application layer that the UI adapters drive; it owns the
/// simulation engine and the animation driver that paces it.
pub struct GameState<S: FrameScheduler> {
    simulation: Simulation,
    driver: AnimationDriver<S>,
    density: f64,
}

impl<S: FrameScheduler> GameState<S> {
    /// Build from a validated configuration
    pub fn new(config: &LifeConfig, scheduler: S) -> Result<Self, LifeError> {
        config.validate()?;

        let mut simulation = match config.seed {
            Some(seed) => Simulation::with_seed(config.grid_size, seed)?,
            None => Simulation::new(config.grid_size)?,
        };
        if let Some(name) = &config.pattern {
            let pattern = presets::by_name(name)
                .ok_or_else(|| LifeError::UnknownPattern(name.clone()))?;
            let (row, col) = pattern.centered_anchor(simulation.size());
            simulation.place_pattern(&pattern, row, col)?;
        }

        Ok(Self {
            simulation,
            driver: AnimationDriver::new(scheduler, config.rate)?,
            density: config.density,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn driver(&self) -> &AnimationDriver<S> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver<S> {
        &mut self.driver
    }

    pub fn grid(&self) -> &Grid {
        self.simulation.grid()
    }

    pub fn grid_snapshot(&self) -> Grid {
        self.simulation.grid_snapshot()
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation()
    }

    pub fn population(&self) -> usize {
        self.simulation.population()
    }

    pub fn size(&self) -> usize {
        self.simulation.size()
    }

    pub fn rate(&self) -> u32 {
        self.driver.rate()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn pause(&mut self) {
        self.driver.stop();
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pause, then advance exactly one generation
    pub fn step_once(&mut self) {
        self.pause();
        self.simulation.step();
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) {
        self.pause();
        self.simulation.clear();
    }

    /// Randomize grid at the current size using the configured density
    pub fn randomize(&mut self) {
        self.pause();
        // density was validated in `new`; the current size is always >= 1
        if let Err(err) = self.simulation.randomize(None, self.density) {
            warn!(%err, "randomize rejected");
        }
    }

    /// Pause and replace the grid with an empty one of `size`.
    /// A rejected size leaves playback and grid untouched.
    pub fn resize(&mut self, size: usize) -> Result<(), LifeError> {
        validate_size(size)?;
        self.pause();
        self.simulation.reset(size)?;
        info!(size, "grid resized");
        Ok(())
    }

    pub fn set_rate(&mut self, steps_per_second: u32) -> Result<(), LifeError> {
        self.driver.set_rate(steps_per_second)
    }

    pub fn adjust_rate(&mut self, delta: i32) {
        self.driver.adjust_rate(delta);
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.simulation.toggle_cell(row, col)
    }

    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), LifeError> {
        self.simulation.place_pattern(pattern, row, col)
    }

    /// Deliver a fired frame tick to the driver. Returns whether a
    /// generation was computed.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        if self.driver.pending_tick().is_none() {
            return false;
        }
        self.driver.on_tick(&mut self.simulation, now_ms)
    }
}
