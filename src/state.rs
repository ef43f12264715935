//! Simulation handle: the live generation plus the worker pool that steps it.

use tracing::{debug, info, trace};

use crate::automaton::{create_grid, popcount_view, step_grid_in, Cell, CountGrid, Grid};
use crate::config::SimulationConfig;
use crate::error::HppError;

/// The internal state of an HPP simulation.
pub struct State {
    grid: Grid,
    generation: u64,
    thread_pool: rayon::ThreadPool,
}

impl State {
    /// Seed a grid from `config` and build a pool of `config.num_threads` workers.
    pub fn new(config: &SimulationConfig) -> Result<Self, HppError> {
        config.validate()?;
        let grid = create_grid(config.width, config.height, &config.seed_region())?;
        Self::from_grid(grid, config.num_threads)
    }

    /// Wrap an existing grid. `num_threads == 0` sizes the pool to the hardware.
    pub fn from_grid(grid: Grid, num_threads: usize) -> Result<Self, HppError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("hpp-worker-{i}"))
            .build()?;

        info!(
            width = grid.width(),
            height = grid.height(),
            workers = thread_pool.current_num_threads(),
            particles = grid.particle_count(),
            "created HPP lattice"
        );

        Ok(State {
            grid,
            generation: 0,
            thread_pool,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    pub fn particle_count(&self) -> u64 {
        self.grid.particle_count()
    }

    /// Overwrite one cell between sweeps.
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), HppError> {
        self.grid.set(x, y, cell)
    }

    /// Extract the current grid, dropping the worker pool.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance one generation. The new grid replaces the old one only after
    /// the whole sweep has finished.
    pub fn step(&mut self) {
        let next = step_grid_in(&self.thread_pool, &self.grid);
        self.grid = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            particles = self.grid.particle_count(),
            "generation complete"
        );
    }

    /// Particle-count view of the current generation.
    pub fn snapshot_counts(&self) -> CountGrid {
        trace!(generation = self.generation, "diagnostic snapshot");
        popcount_view(&self.grid)
    }

    /// Advance `iterations` generations. Whenever the generation about to be
    /// stepped is a multiple of `snapshot_interval`, `observer` receives that
    /// generation number and its count view first.
    pub fn run<F>(
        &mut self,
        iterations: u64,
        snapshot_interval: u64,
        mut observer: F,
    ) -> Result<(), HppError>
    where
        F: FnMut(u64, CountGrid),
    {
        if snapshot_interval == 0 {
            return Err(HppError::InvalidConfig("snapshot_interval must be positive"));
        }

        info!(
            start = self.generation,
            iterations,
            snapshot_interval,
            "starting run"
        );

        for _ in 0..iterations {
            if self.generation % snapshot_interval == 0 {
                observer(self.generation, self.snapshot_counts());
            }
            self.step();
        }

        info!(
            generation = self.generation,
            particles = self.grid.particle_count(),
            "run finished"
        );
        Ok(())
    }
}
