//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors raised while configuring or constructing a simulation.
///
/// Stepping itself never fails: once a grid exists, every generation is
/// computable.
#[derive(Debug, Error)]
pub enum HppError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "seed region {width}x{height} at ({x}, {y}) does not fit a {grid_width}x{grid_height} grid"
    )]
    SeedOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    #[error("cell value {0} is not a 4-bit occupancy vector")]
    InvalidCell(u8),

    #[error("coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: u32, y: u32 },

    #[error("expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}
