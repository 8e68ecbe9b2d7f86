//! The simulation engine: owns the grid and advances it one generation at a
//! time.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{Grid, Pattern};
use crate::error::LifeError;

/// Grids with at least this many cells are stepped with rayon
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Probability of a cell starting alive after `randomize`
pub const DEFAULT_DENSITY: f64 = 0.3;

pub struct Simulation {
    grid: Grid,
    generation: u64,
    rng: StdRng,
}

impl Simulation {
    /// Empty grid of `size`, random source seeded from the OS
    pub fn new(size: usize) -> Result<Self, LifeError> {
        Self::with_rng(size, StdRng::from_os_rng())
    }

    /// Empty grid with a deterministic random source
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, LifeError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(size: usize, rng: StdRng) -> Result<Self, LifeError> {
        validate_size(size)?;
        Ok(Self {
            grid: Grid::new(size),
            generation: 0,
            rng,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow the current grid without copying
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current grid
    pub fn grid_snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Replace the grid with an all-dead `size`×`size` grid
    pub fn reset(&mut self, size: usize) -> Result<(), LifeError> {
        validate_size(size)?;
        self.grid = Grid::new(size);
        self.generation = 0;
        info!(size, "grid reset");
        Ok(())
    }

    /// Reset at the current size
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.size());
        self.generation = 0;
        info!(size = self.size(), "grid cleared");
    }

    /// Fill a grid (current size unless `size` is given) with cells alive
    /// independently with probability `density`
    pub fn randomize(&mut self, size: Option<usize>, density: f64) -> Result<(), LifeError> {
        let size = size.unwrap_or(self.size());
        validate_size(size)?;
        validate_density(density)?;

        self.grid = Grid::random(size, density, &mut self.rng);
        self.generation = 0;
        info!(size, density, population = self.population(), "grid randomized");
        Ok(())
    }

    /// Advance one generation. The next grid is built in a fresh buffer and
    /// swapped in whole.
    pub fn step(&mut self) {
        let next = if self.size() * self.size() >= PARALLEL_THRESHOLD {
            self.grid.evolve_parallel()
        } else {
            self.grid.evolve()
        };
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, "stepped");
    }

    /// Flip a single cell. Does not touch the generation counter.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        let cell = self.grid.get(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            size: self.size(),
        })?;
        self.grid.set(row, col, cell.toggled());
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at (row, col). Pattern cells
    /// past the edge are dropped, but the anchor itself must be on the grid.
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), LifeError> {
        if !self.grid.contains(row, col) {
            return Err(LifeError::OutOfBounds { row, col, size: self.size() });
        }
        let written = pattern.place_on(&mut self.grid, row, col);
        info!(pattern = pattern.name, row, col, written, "pattern placed");
        Ok(())
    }
}

pub(crate) fn validate_size(size: usize) -> Result<(), LifeError> {
    if size == 0 {
        return Err(LifeError::InvalidGridSize(size));
    }
    Ok(())
}

pub(crate) fn validate_density(density: f64) -> Result<(), LifeError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    Ok(())
}
