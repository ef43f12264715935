//! Data-parallel generation sweep.
//!
//! All reads come from the immutable generation-N grid, all writes go to a
//! freshly allocated generation-N+1 buffer split into disjoint rows. The new
//! grid only exists once every row has been written.

use rayon::prelude::*;

use super::cell::Cell;
use super::collision::next_cell;
use super::grid::Grid;

/// Step the lattice forward by one generation on the current rayon pool.
pub fn step_grid(grid: &Grid) -> Grid {
    let width = grid.width();
    let mut next = vec![Cell::EMPTY; grid.cells().len()];

    next.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = next_cell(grid, x as u32, y as u32);
            }
        });

    Grid::from_cells(width, grid.height(), next)
}

/// Step the lattice forward by one generation on a dedicated worker pool.
pub fn step_grid_in(pool: &rayon::ThreadPool, grid: &Grid) -> Grid {
    pool.install(|| step_grid(grid))
}
