mod cell;
mod grid;
mod patterns;
mod simulation;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use simulation::{Simulation, DEFAULT_DENSITY, PARALLEL_THRESHOLD};
pub(crate) use simulation::{validate_density, validate_size};
