//! State creation, destruction, and generation queries.

use tracing::warn;

use crate::automaton::SeedRegion;
use crate::config::SimulationConfig;
use crate::state::State;

/// Creates a seeded simulation and returns an opaque pointer.
///
/// `num_threads == 0` sizes the worker pool to the hardware.
///
/// # Returns
/// A pointer to a new State, or null if the dimensions or seed region are
/// invalid or the worker pool cannot be built. The reason for a null return
/// is reported as a `tracing` warning event carrying the error.
///
/// # Safety
/// The returned pointer must eventually be freed with `hpp_destroy()`.
#[no_mangle]
pub extern "C" fn hpp_create(
    width: u32,
    height: u32,
    seed_x: u32,
    seed_y: u32,
    seed_width: u32,
    seed_height: u32,
    num_threads: u32,
) -> *mut State {
    let config = SimulationConfig {
        width,
        height,
        seed: Some(SeedRegion {
            x: seed_x,
            y: seed_y,
            width: seed_width,
            height: seed_height,
        }),
        num_threads: num_threads as usize,
        ..SimulationConfig::default()
    };

    match State::new(&config) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(err) => {
            warn!(%err, "hpp_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `hpp_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn hpp_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn hpp_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
