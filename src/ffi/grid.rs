//! Cell access and stepping.

use tracing::warn;

use crate::automaton::Cell;
use crate::state::State;

/// Gets the occupancy bitmask of a cell (0 to 15).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn hpp_get_cell(ptr: *const State, x: u32, y: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let grid = (*ptr).grid();
    if !grid.in_bounds(x, y) {
        return 0;
    }
    grid.get(x, y).raw()
}

/// Sets the occupancy bitmask of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer, out of bounds, or value above 15).
#[no_mangle]
pub unsafe extern "C" fn hpp_set_cell(ptr: *mut State, x: u32, y: u32, value: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match Cell::new(value).and_then(|cell| state.set_cell(x, y, cell)) {
        Ok(()) => 0,
        Err(err) => {
            warn!(%err, "hpp_set_cell rejected");
            1
        }
    }
}

/// Advances the lattice by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn hpp_step(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    (*ptr).step();
    0
}
