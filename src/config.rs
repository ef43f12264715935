//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::automaton::SeedRegion;
use crate::error::HppError;

pub const DEFAULT_WIDTH: u32 = 200;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_SEED_SIDE: u32 = 101;
pub const DEFAULT_ITERATIONS: u64 = 10_000;
pub const DEFAULT_SNAPSHOT_INTERVAL: u64 = 10;

/// Static configuration for an HPP run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Block of fully occupied cells at generation 0. When absent, a square
    /// block of side 101 (shrunk to fit small grids) is centred on the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedRegion>,
    /// Number of generations a full run advances.
    pub iterations: u64,
    /// Generations between diagnostic snapshots.
    pub snapshot_interval: u64,
    /// Worker threads per sweep; 0 uses the available hardware parallelism.
    pub num_threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            iterations: DEFAULT_ITERATIONS,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
            num_threads: 0,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, HppError> {
        let config: SimulationConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The seed block for this grid: the configured one, or the centred default.
    pub fn seed_region(&self) -> SeedRegion {
        self.seed.unwrap_or_else(|| {
            let side = DEFAULT_SEED_SIDE.min(self.width).min(self.height);
            SeedRegion::centered(self.width, self.height, side)
        })
    }

    pub fn validate(&self) -> Result<(), HppError> {
        if self.width == 0 || self.height == 0 {
            return Err(HppError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.seed_region().validate(self.width, self.height)?;
        if self.snapshot_interval == 0 {
            return Err(HppError::InvalidConfig("snapshot_interval must be positive"));
        }
        Ok(())
    }
}
