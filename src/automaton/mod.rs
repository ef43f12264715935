//! Core lattice-gas logic.
//!
//! This module contains the pure grid operations: occupancy encoding,
//! periodic addressing, the collision rule, the parallel sweep, and the
//! particle-count view. The `State` handle and the FFI layer call these.

pub mod cell;
pub mod collision;
pub mod diagnostics;
pub mod grid;
pub mod stepping;

pub use cell::{encode, is_particle, Cell, Direction};
pub use collision::{next_cell, psi};
pub use diagnostics::{hamming_weight, popcount_view, CountGrid};
pub use grid::{create_grid, index_of, wrap, Grid, SeedRegion};
pub use stepping::{step_grid, step_grid_in};
