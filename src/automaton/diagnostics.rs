//! Particle-count view of a generation for external rendering.

use super::grid::Grid;

/// Per-cell particle counts (0 to 4), row-major like [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGrid {
    pub width: u32,
    pub height: u32,
    pub counts: Vec<u8>,
}

impl CountGrid {
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) outside count grid",
            x,
            y
        );
        self.counts[y as usize * self.width as usize + x as usize]
    }
}

/// Two-stage masked-add population count. Exact for values below 16.
#[inline]
pub fn hamming_weight(value: u32) -> u32 {
    let pairs = (value & 0x5555_5555) + ((value >> 1) & 0x5555_5555);
    (pairs & 0x3333_3333) + ((pairs >> 2) & 0x3333_3333)
}

/// Build the particle-count view of `grid`. The grid is only read.
pub fn popcount_view(grid: &Grid) -> CountGrid {
    let counts = grid
        .cells()
        .iter()
        .map(|cell| hamming_weight(cell.raw() as u32) as u8)
        .collect();

    CountGrid {
        width: grid.width(),
        height: grid.height(),
        counts,
    }
}
