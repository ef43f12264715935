//! C FFI layer for external renderers and drivers.
//!
//! This module exports C ABI functions over an opaque `State` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module and `State`. These functions
//! are thin wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.

pub mod grid;
pub mod lifecycle;
pub mod snapshot;

pub use grid::{hpp_get_cell, hpp_set_cell, hpp_step};
pub use lifecycle::{hpp_create, hpp_destroy, hpp_get_generation};
pub use snapshot::hpp_snapshot_counts;
