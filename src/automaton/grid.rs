//! Toroidal grid storage, seeding, and periodic neighbor addressing.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::error::HppError;

/// One generation of the lattice. Cells are stored row-major (y slowest, x fastest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Rectangular block of fully occupied cells used to seed a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SeedRegion {
    /// Square block of side `side` near the grid centre, with its origin at
    /// `(width / 2 - side / 2, height / 2 - side / 2)`.
    pub fn centered(grid_width: u32, grid_height: u32, side: u32) -> Self {
        SeedRegion {
            x: (grid_width / 2).saturating_sub(side / 2),
            y: (grid_height / 2).saturating_sub(side / 2),
            width: side,
            height: side,
        }
    }

    /// Check that the region is non-empty and lies entirely inside the grid.
    pub fn validate(&self, grid_width: u32, grid_height: u32) -> Result<(), HppError> {
        let fits_x = self.x.checked_add(self.width).is_some_and(|end| end <= grid_width);
        let fits_y = self.y.checked_add(self.height).is_some_and(|end| end <= grid_height);

        if self.width == 0 || self.height == 0 || !fits_x || !fits_y {
            return Err(HppError::SeedOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                grid_width,
                grid_height,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x - self.x < self.width && y >= self.y && y - self.y < self.height
    }
}

impl Grid {
    /// An empty grid with every lane vacant.
    pub fn new(width: u32, height: u32) -> Result<Self, HppError> {
        if width == 0 || height == 0 {
            return Err(HppError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        })
    }

    /// Build a grid from raw row-major occupancy values.
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self, HppError> {
        let mut grid = Grid::new(width, height)?;
        if raw.len() != grid.cells.len() {
            return Err(HppError::DimensionMismatch {
                expected: grid.cells.len(),
                actual: raw.len(),
            });
        }
        for (slot, &value) in grid.cells.iter_mut().zip(raw) {
            *slot = Cell::new(value)?;
        }
        Ok(grid)
    }

    /// Assemble a grid from cells already known to match the dimensions.
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read a cell. Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        debug_assert!(self.in_bounds(x, y), "({}, {}) outside grid", x, y);
        self.cells[index_of(self.width, x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), HppError> {
        if !self.in_bounds(x, y) {
            return Err(HppError::OutOfBounds { x, y });
        }
        let idx = index_of(self.width, x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Read the cell at `(x + dx, y + dy)` with toroidal wraparound.
    #[inline]
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> Cell {
        let nx = wrap(x, dx, self.width);
        let ny = wrap(y, dy, self.height);
        self.get(nx, ny)
    }

    /// Total number of particles across all lanes of all cells.
    pub fn particle_count(&self) -> u64 {
        self.cells.iter().map(|c| c.particles() as u64).sum()
    }
}

/// Initialize a grid with every lane set inside `seed` and empty elsewhere.
pub fn create_grid(width: u32, height: u32, seed: &SeedRegion) -> Result<Grid, HppError> {
    let mut grid = Grid::new(width, height)?;
    seed.validate(width, height)?;

    for y in seed.y..seed.y + seed.height {
        for x in seed.x..seed.x + seed.width {
            let idx = index_of(width, x, y);
            grid.cells[idx] = Cell::FULL;
        }
    }

    Ok(grid)
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// `(coord + delta) mod size`, always in `0..size`.
#[inline]
pub fn wrap(coord: u32, delta: i32, size: u32) -> u32 {
    (coord as i64 + delta as i64).rem_euclid(size as i64) as u32
}
