//! The simulation engine: seeding, sub-stepping and tick bookkeeping.
//!
//! [`SimulationEngine`] wires together the ping-pong accumulator, the
//! configured stencil, the seeder and the parameters. It has no threads
//! of its own; [`LockstepSim`](crate::LockstepSim) calls it directly and
//! [`RealtimeSim`](crate::RealtimeSim) moves it onto a tick thread.
//!
//! # States
//!
//! ```text
//! Uninitialized ──seed()──▶ Running ──tick()──▶ Running
//!        ▲                     │
//!        └──────reset()────────┘
//! ```

use std::fmt;
use std::time::Instant;

use grayscott_arena::{ArenaConfig, ArenaError, OwnedSnapshot, PingPongBuffer, Snapshot};
use grayscott_core::{Extent, Generation, Grid, SimParams, TickId};
use grayscott_stencil::{LaplacianStencil, ScratchRegion};
use grayscott_stencils::{step_into, NoisePatchSeeder, StepError};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::TickMetrics;
use crate::present::Presenter;

// ── TickError ────────────────────────────────────────────────────

/// Errors from ticking or reading the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickError {
    /// No grid has been seeded since construction or the last reset.
    NotSeeded,
    /// The accumulator rejected an operation.
    Arena(ArenaError),
    /// The stencil executor rejected its buffers.
    Step(StepError),
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSeeded => write!(f, "simulation has not been seeded"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
        }
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotSeeded => None,
            Self::Arena(e) => Some(e),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<ArenaError> for TickError {
    fn from(e: ArenaError) -> Self {
        match e {
            ArenaError::NotSeeded => Self::NotSeeded,
            other => Self::Arena(other),
        }
    }
}

impl From<StepError> for TickError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

// ── SimulationEngine ─────────────────────────────────────────────

/// Lifecycle state of a [`SimulationEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Constructed or reset; no sub-step may run.
    Uninitialized,
    /// Seeded; ticks run.
    Running,
}

/// Single-threaded Gray-Scott simulation.
pub struct SimulationEngine {
    config: SimConfig,
    extent: Extent,
    buffer: PingPongBuffer,
    stencil: Box<dyn LaplacianStencil>,
    seeder: NoisePatchSeeder,
    scratch: ScratchRegion,
    params: SimParams,
    tick_id: TickId,
    state: EngineState,
    last_metrics: TickMetrics,
}

// Compile-time assertion: SimulationEngine must be Send (it moves onto the tick thread).
const _: fn() = || {
    fn assert_send<T: Send>() {}
    assert_send::<SimulationEngine>();
};

impl SimulationEngine {
    /// Create an engine from a [`SimConfig`].
    ///
    /// Validates the configuration, allocates both grids and the scratch
    /// region, and returns an engine in [`EngineState::Uninitialized`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let extent = config.validated_extent()?;
        let seeder = NoisePatchSeeder::from_config(config.seeder)
            .map_err(|reason| ConfigError::InvalidSeeder { reason })?;
        let buffer = PingPongBuffer::new(ArenaConfig {
            extent,
            format: config.storage,
        });
        Ok(Self {
            extent,
            buffer,
            stencil: config.strategy.stencil(),
            seeder,
            scratch: ScratchRegion::new(extent.sample_count()),
            params: config.params,
            tick_id: TickId(0),
            state: EngineState::Uninitialized,
            last_metrics: TickMetrics::default(),
            config,
        })
    }

    /// Seed the accumulator with the configured noise patch.
    pub fn seed(&mut self) -> Result<(), ArenaError> {
        let grid = self.seeder.seed(self.extent);
        self.seed_with_grid(&grid)
    }

    /// Seed the accumulator with a caller-supplied grid.
    ///
    /// Returns `Err(ArenaError::ExtentMismatch)` if the extent differs.
    pub fn seed_with_grid(&mut self, grid: &Grid) -> Result<(), ArenaError> {
        self.buffer.seed(grid)?;
        self.tick_id = TickId(0);
        self.state = EngineState::Running;
        Ok(())
    }

    /// Run one sub-step: stencil and reaction over the whole grid, then
    /// publish. Parameters are read once, before the first cell.
    fn sub_step(&mut self) -> Result<(), TickError> {
        let guard = self.buffer.begin_step()?;
        step_into(
            self.stencil.as_ref(),
            guard.input,
            guard.output,
            &self.params,
            self.config.edge,
            self.config.parallelism,
            &mut self.scratch,
        )?;
        self.buffer.publish(self.tick_id)?;
        Ok(())
    }

    /// Execute one tick: exactly `sub_steps` sequential sub-steps.
    ///
    /// Returns `Err(TickError::NotSeeded)` before [`seed`](Self::seed).
    pub fn tick(&mut self) -> Result<TickMetrics, TickError> {
        if self.state != EngineState::Running {
            return Err(TickError::NotSeeded);
        }
        let tick_start = Instant::now();
        self.tick_id = TickId(self.tick_id.0 + 1);

        let mut sub_step_us = Vec::with_capacity(self.config.sub_steps as usize);
        for _ in 0..self.config.sub_steps {
            let start = Instant::now();
            self.sub_step()?;
            sub_step_us.push(start.elapsed().as_micros() as u64);
        }

        let metrics = TickMetrics {
            tick_id: self.tick_id,
            total_us: tick_start.elapsed().as_micros() as u64,
            sub_step_us,
            present_us: 0,
            stencil: self.config.strategy.as_str(),
            generation: self.buffer.generation(),
        };
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Hand the committed grid to `presenter`. Returns the time spent, in
    /// microseconds.
    pub fn present(&mut self, presenter: &mut dyn Presenter) -> Result<u64, TickError> {
        let start = Instant::now();
        presenter.present(&self.buffer.snapshot()?);
        let present_us = start.elapsed().as_micros() as u64;
        self.last_metrics.present_us = present_us;
        Ok(present_us)
    }

    /// Replace the parameters. Takes effect at the next sub-step.
    pub fn set_params(&mut self, params: SimParams) {
        self.params = params;
    }

    /// Current parameters.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Borrow the committed grid.
    pub fn snapshot(&self) -> Result<Snapshot<'_>, TickError> {
        Ok(self.buffer.snapshot()?)
    }

    /// Copy the committed grid into a thread-safe snapshot.
    pub fn owned_snapshot(&self) -> Result<OwnedSnapshot, TickError> {
        Ok(self.buffer.owned_snapshot()?)
    }

    /// Return to [`EngineState::Uninitialized`], keeping both grids
    /// allocated. Seeding is required before ticks resume.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.tick_id = TickId(0);
        self.state = EngineState::Uninitialized;
        self.last_metrics = TickMetrics::default();
    }

    /// Lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Last completed tick (`TickId(0)` before the first).
    pub fn current_tick(&self) -> TickId {
        self.tick_id
    }

    /// Accumulator generation (sub-steps since seeding).
    pub fn generation(&self) -> Generation {
        self.buffer.generation()
    }

    /// Metrics of the last tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    /// Grid extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The validated configuration. `params` holds the value at
    /// construction; see [`params`](Self::params) for the live value.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("extent", &self.extent)
            .field("stencil", &self.stencil.name())
            .field("params", &self.params)
            .field("tick_id", &self.tick_id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayscott_core::{Cell, GridRead};

    fn small_config() -> SimConfig {
        let mut c = SimConfig::with_extent(16, 16);
        c.seeder.inset = 4;
        c.seeder.seed = Some(7);
        c
    }

    #[test]
    fn new_engine_is_uninitialized() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        assert_eq!(e.state(), EngineState::Uninitialized);
        assert_eq!(e.tick().unwrap_err(), TickError::NotSeeded);
        assert_eq!(e.snapshot().unwrap_err(), TickError::NotSeeded);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut c = small_config();
        c.sub_steps = 0;
        assert_eq!(SimulationEngine::new(c).unwrap_err(), ConfigError::ZeroSubSteps);

        let mut c = small_config();
        c.sub_steps = SimConfig::MAX_SUB_STEPS + 1;
        assert!(matches!(
            SimulationEngine::new(c),
            Err(ConfigError::TooManySubSteps { .. })
        ));

        let mut c = small_config();
        c.seeder.noise_min = -3e38;
        c.seeder.noise_max = 3e38;
        assert!(matches!(
            SimulationEngine::new(c),
            Err(ConfigError::InvalidSeeder { .. })
        ));
    }

    #[test]
    fn tick_runs_configured_sub_steps() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        e.seed().unwrap();
        let m = e.tick().unwrap();
        assert_eq!(m.sub_steps(), 5);
        assert_eq!(m.generation, Generation(5));
        assert_eq!(m.tick_id, TickId(1));
        assert_eq!(m.stencil, "fused");
        let m = e.tick().unwrap();
        assert_eq!(m.generation, Generation(10));
        assert_eq!(e.snapshot().unwrap().tick_id(), TickId(2));
    }

    #[test]
    fn quiescent_seed_stays_put() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        e.seed_with_grid(&Grid::filled(e.extent(), Cell::QUIESCENT))
            .unwrap();
        e.tick().unwrap();
        let snap = e.snapshot().unwrap();
        assert!(snap.samples().chunks(2).all(|c| c == [1.0, 0.0]));
    }

    #[test]
    fn seed_with_wrong_extent_rejected() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        let wrong = Grid::filled(Extent::new(3, 3).unwrap(), Cell::QUIESCENT);
        assert!(matches!(
            e.seed_with_grid(&wrong),
            Err(ArenaError::ExtentMismatch { .. })
        ));
        assert_eq!(e.state(), EngineState::Uninitialized);
    }

    #[test]
    fn reset_requires_reseed() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        e.seed().unwrap();
        e.tick().unwrap();
        e.reset();
        assert_eq!(e.state(), EngineState::Uninitialized);
        assert_eq!(e.current_tick(), TickId(0));
        assert_eq!(e.tick().unwrap_err(), TickError::NotSeeded);
        e.seed().unwrap();
        assert_eq!(e.tick().unwrap().tick_id, TickId(1));
    }

    #[test]
    fn fixed_seed_runs_are_identical() {
        let run = || {
            let mut e = SimulationEngine::new(small_config()).unwrap();
            e.seed().unwrap();
            for _ in 0..3 {
                e.tick().unwrap();
            }
            e.snapshot().unwrap().grid().clone()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn param_change_applies_from_next_tick() {
        let mut e = SimulationEngine::new(small_config()).unwrap();
        e.seed().unwrap();
        let frozen = SimParams::new(0.0, 0.0, 0.0, 0.0);
        e.set_params(frozen);
        let before = e.snapshot().unwrap().grid().clone();
        e.tick().unwrap();
        // With no diffusion and no feed/kill only u*v*v moves mass from u to v.
        let after = e.snapshot().unwrap().grid().clone();
        for (b, a) in before.samples().chunks(2).zip(after.samples().chunks(2)) {
            assert!(((b[0] + b[1]) - (a[0] + a[1])).abs() < 1e-5);
        }
    }
}
