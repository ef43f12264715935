//! HPP Lattice - 2D Lattice-Gas Cellular Automaton
//!
//! Particles ride one of four lanes (right, down, left, up) per cell on a
//! toroidal grid, propagate one cell per generation, and rotate head-on pairs
//! by 90 degrees when the crossing axis is empty.
//!
//! The pure rule lives in `automaton`, the owning handle in `state`, and a
//! C ABI for external renderers in `ffi`.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{Cell, CountGrid, Direction, Grid, SeedRegion};
pub use config::SimulationConfig;
pub use error::HppError;
pub use state::State;

/// Construct the generation-0 grid: every lane set inside `seed`, empty elsewhere.
pub fn initialize(width: u32, height: u32, seed: &SeedRegion) -> Result<Grid, HppError> {
    automaton::create_grid(width, height, seed)
}

/// Advance one generation on the global rayon pool.
pub fn step(grid: &Grid) -> Grid {
    automaton::step_grid(grid)
}

/// Particle-count view of a generation. The grid is only read.
pub fn snapshot_counts(grid: &Grid) -> CountGrid {
    automaton::popcount_view(grid)
}
