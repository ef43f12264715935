//! HPP collision and transport rule for a single cell.
//!
//! Every lane of cell `(x, y)` at generation N+1 is fed by the matching lane of
//! the upstream neighbor at generation N:
//! - right from the west neighbor `(x-1, y)`
//! - down from the north neighbor `(x, y-1)`
//! - left from the east neighbor `(x+1, y)`
//! - up from the south neighbor `(x, y+1)`
//!
//! A head-on pair meeting at `(x, y)` with the crossing axis empty is rotated
//! by 90 degrees. `psi` is +1 for a horizontal pair turning vertical, -1 for a
//! vertical pair turning horizontal, 0 otherwise.

use super::cell::{encode, is_particle, Cell, Direction};
use super::grid::Grid;

/// Particles inbound to `(x, y)` from each upstream neighbor, indexed by lane.
#[inline]
fn inbound(grid: &Grid, x: u32, y: u32) -> [bool; 4] {
    [
        is_particle(grid.neighbor(x, y, -1, 0), Direction::Right),
        is_particle(grid.neighbor(x, y, 0, -1), Direction::Down),
        is_particle(grid.neighbor(x, y, 1, 0), Direction::Left),
        is_particle(grid.neighbor(x, y, 0, 1), Direction::Up),
    ]
}

#[inline]
fn collision_indicator(arriving: [bool; 4]) -> i8 {
    let [right, down, left, up] = arriving;

    let horizontal_pair = right && left;
    let horizontal_absent = !right && !left;
    let vertical_pair = down && up;
    let vertical_absent = !down && !up;

    let collision = horizontal_pair && vertical_absent;
    let moving_out = vertical_pair && horizontal_absent;

    collision as i8 - moving_out as i8
}

/// Local collision indicator at `(x, y)`, in `-1..=1`.
pub fn psi(grid: &Grid, x: u32, y: u32) -> i8 {
    collision_indicator(inbound(grid, x, y))
}

/// Occupancy of `(x, y)` at the next generation.
pub fn next_cell(grid: &Grid, x: u32, y: u32) -> Cell {
    let arriving = inbound(grid, x, y);
    let psi = collision_indicator(arriving);

    let lane = |d: Direction, sign: i8| {
        let value = arriving[d as usize] as i8 + sign * psi;
        debug_assert!(
            value == 0 || value == 1,
            "lane {:?} at ({}, {}) evaluated to {}",
            d,
            x,
            y,
            value
        );
        value == 1
    };

    encode([
        lane(Direction::Right, -1),
        lane(Direction::Down, 1),
        lane(Direction::Left, -1),
        lane(Direction::Up, 1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: u32, height: u32, particles: &[(u32, u32, Direction)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y, d) in particles {
            let cell = grid.get(x, y).with(d);
            grid.set(x, y, cell).unwrap();
        }
        grid
    }

    #[test]
    fn test_psi_empty() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(psi(&grid, 2, 2), 0);
        assert_eq!(next_cell(&grid, 2, 2), Cell::EMPTY);
    }

    #[test]
    fn test_psi_horizontal_collision() {
        let grid = grid_with(5, 5, &[(1, 2, Direction::Right), (3, 2, Direction::Left)]);
        assert_eq!(psi(&grid, 2, 2), 1);

        let next = next_cell(&grid, 2, 2);
        assert!(is_particle(next, Direction::Down));
        assert!(is_particle(next, Direction::Up));
        assert!(!is_particle(next, Direction::Right));
        assert!(!is_particle(next, Direction::Left));
    }

    #[test]
    fn test_psi_vertical_collision() {
        let grid = grid_with(5, 5, &[(2, 1, Direction::Down), (2, 3, Direction::Up)]);
        assert_eq!(psi(&grid, 2, 2), -1);

        let next = next_cell(&grid, 2, 2);
        assert_eq!(
            next,
            Cell::EMPTY.with(Direction::Right).with(Direction::Left)
        );
    }

    #[test]
    fn test_psi_blocked_by_crossing_traffic() {
        // Horizontal pair plus one vertical particle: no rotation.
        let grid = grid_with(
            5,
            5,
            &[
                (1, 2, Direction::Right),
                (3, 2, Direction::Left),
                (2, 1, Direction::Down),
            ],
        );
        assert_eq!(psi(&grid, 2, 2), 0);
        assert_eq!(
            next_cell(&grid, 2, 2),
            Cell::EMPTY
                .with(Direction::Right)
                .with(Direction::Left)
                .with(Direction::Down)
        );

        // Four-way crossing passes straight through.
        let grid = grid_with(
            5,
            5,
            &[
                (1, 2, Direction::Right),
                (3, 2, Direction::Left),
                (2, 1, Direction::Down),
                (2, 3, Direction::Up),
            ],
        );
        assert_eq!(psi(&grid, 2, 2), 0);
        assert_eq!(next_cell(&grid, 2, 2), Cell::FULL);
    }

    #[test]
    fn test_single_particle_propagates() {
        let grid = grid_with(5, 5, &[(1, 2, Direction::Right)]);
        assert_eq!(next_cell(&grid, 2, 2), Cell::EMPTY.with(Direction::Right));
        assert_eq!(next_cell(&grid, 1, 2), Cell::EMPTY);

        let grid = grid_with(5, 5, &[(2, 3, Direction::Up)]);
        assert_eq!(next_cell(&grid, 2, 2), Cell::EMPTY.with(Direction::Up));
    }

    #[test]
    fn test_ignores_lanes_pointing_away() {
        // West neighbor moving left does not reach (2, 2).
        let grid = grid_with(5, 5, &[(1, 2, Direction::Left), (3, 2, Direction::Right)]);
        assert_eq!(psi(&grid, 2, 2), 0);
        assert_eq!(next_cell(&grid, 2, 2), Cell::EMPTY);
    }

    #[test]
    fn test_collision_across_periodic_edge() {
        let grid = grid_with(4, 3, &[(3, 1, Direction::Right), (1, 1, Direction::Left)]);
        assert_eq!(psi(&grid, 0, 1), 1);
        assert_eq!(
            next_cell(&grid, 0, 1),
            Cell::EMPTY.with(Direction::Down).with(Direction::Up)
        );
    }

    #[test]
    fn test_every_neighborhood_stays_in_range() {
        // All 2^4 inbound combinations produce valid lanes and conserve count.
        for mask in 0..16u8 {
            let mut particles = Vec::new();
            if mask & 1 != 0 {
                particles.push((1, 2, Direction::Right));
            }
            if mask & 2 != 0 {
                particles.push((2, 1, Direction::Down));
            }
            if mask & 4 != 0 {
                particles.push((3, 2, Direction::Left));
            }
            if mask & 8 != 0 {
                particles.push((2, 3, Direction::Up));
            }
            let grid = grid_with(5, 5, &particles);
            let next = next_cell(&grid, 2, 2);
            assert!(next.raw() <= 15);
            assert_eq!(next.particles(), mask.count_ones(), "mask {:04b}", mask);
        }
    }
}
