//! Four-lane occupancy encoding for a single lattice cell.

use crate::error::HppError;

/// Lane direction. The discriminant is the bit index inside a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Occupancy bitmask of one cell. Always in `0..=15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const FULL: Cell = Cell(0b1111);

    /// Build a cell from a raw value, rejecting anything outside 4 bits.
    pub fn new(raw: u8) -> Result<Self, HppError> {
        if raw > Self::FULL.0 {
            return Err(HppError::InvalidCell(raw));
        }
        Ok(Cell(raw))
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn with(self, direction: Direction) -> Cell {
        Cell(self.0 | direction.bit())
    }

    /// Number of particles in this cell (0 to 4).
    #[inline]
    pub const fn particles(self) -> u32 {
        self.0.count_ones()
    }
}

/// Test whether lane `direction` of `cell` holds a particle.
#[inline]
pub fn is_particle(cell: Cell, direction: Direction) -> bool {
    cell.0 & direction.bit() != 0
}

/// Combine four lane bits, indexed by `Direction as usize`, into a cell.
#[inline]
pub fn encode(lanes: [bool; 4]) -> Cell {
    let raw = lanes
        .iter()
        .enumerate()
        .fold(0u8, |acc, (d, &set)| acc | ((set as u8) << d));
    Cell(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_bits() {
        assert_eq!(Direction::Right.bit(), 1);
        assert_eq!(Direction::Down.bit(), 2);
        assert_eq!(Direction::Left.bit(), 4);
        assert_eq!(Direction::Up.bit(), 8);
    }

    #[test]
    fn test_is_particle() {
        let cell = Cell::new(0b0101).unwrap();
        assert!(is_particle(cell, Direction::Right));
        assert!(!is_particle(cell, Direction::Down));
        assert!(is_particle(cell, Direction::Left));
        assert!(!is_particle(cell, Direction::Up));

        for d in Direction::ALL {
            assert!(!is_particle(Cell::EMPTY, d));
            assert!(is_particle(Cell::FULL, d));
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode([false; 4]), Cell::EMPTY);
        assert_eq!(encode([true; 4]), Cell::FULL);
        assert_eq!(encode([false, true, false, true]).raw(), 10);
        assert_eq!(encode([true, false, false, false]).raw(), 1);
    }

    #[test]
    fn test_encode_inverts_is_particle() {
        for raw in 0..=15u8 {
            let cell = Cell::new(raw).unwrap();
            let lanes = Direction::ALL.map(|d| is_particle(cell, d));
            assert_eq!(encode(lanes), cell);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Cell::new(15).is_ok());
        assert!(matches!(Cell::new(16), Err(HppError::InvalidCell(16))));
        assert!(matches!(Cell::new(255), Err(HppError::InvalidCell(255))));
    }

    #[test]
    fn test_particles() {
        assert_eq!(Cell::EMPTY.particles(), 0);
        assert_eq!(Cell::FULL.particles(), 4);
        assert_eq!(Cell::EMPTY.with(Direction::Up).with(Direction::Left).particles(), 2);
    }
}
