//! Particle-count export for renderers.

use crate::state::State;

/// Writes the particle count (0 to 4) of every cell into `out_buf`.
///
/// # Layout
/// Row-major: y changes slowest, x changes fastest.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on null pointers or a buffer shorter than
/// `width * height`.
#[no_mangle]
pub unsafe extern "C" fn hpp_snapshot_counts(
    ptr: *const State,
    out_buf: *mut u8,
    len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let view = (*ptr).snapshot_counts();
    if len < view.counts.len() as u64 {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, view.counts.len());
    out_slice.copy_from_slice(&view.counts);

    view.counts.len() as u64
}
