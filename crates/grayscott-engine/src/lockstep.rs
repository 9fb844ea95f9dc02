//! Lockstep (synchronous) simulation.
//!
//! [`LockstepSim`] runs each tick on the caller's thread: `sub_steps`
//! sub-steps, then the presenter, then a borrowed [`Snapshot`] of the
//! committed grid comes back.
//!
//! # Ownership model
//!
//! `LockstepSim` is [`Send`] but not [`Sync`]. [`tick()`](LockstepSim::tick)
//! returns a snapshot that borrows from `self`, so the next tick cannot
//! start while the caller still holds the previous frame.

use grayscott_arena::{ArenaError, Snapshot};
use grayscott_core::SimParams;

use crate::config::{ConfigError, SimConfig};
use crate::engine::{SimulationEngine, TickError};
use crate::metrics::TickMetrics;
use crate::present::Presenter;

// Compile-time assertion: LockstepSim is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepSim>();
    }
};

// ── TickResult ──────────────────────────────────────────────────

/// Result of a successful [`LockstepSim::tick()`] call.
pub struct TickResult<'s> {
    /// The committed grid after this tick.
    pub snapshot: Snapshot<'s>,
    /// Timing for this tick, including the presenter.
    pub metrics: TickMetrics,
}

// ── LockstepSim ─────────────────────────────────────────────────

/// Single-threaded driver: tick, present, return.
///
/// # Example
///
/// ```ignore
/// let mut sim = LockstepSim::new(config, Box::new(presenter))?;
/// sim.seed()?;
/// for _ in 0..100 {
///     let result = sim.tick()?;
///     println!("{} us", result.metrics.total_us);
/// }
/// ```
pub struct LockstepSim {
    engine: SimulationEngine,
    presenter: Box<dyn Presenter>,
}

impl LockstepSim {
    /// Build the engine from `config`. The simulation starts unseeded.
    pub fn new(config: SimConfig, presenter: Box<dyn Presenter>) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: SimulationEngine::new(config)?,
            presenter,
        })
    }

    /// Wrap an existing engine.
    pub fn from_engine(engine: SimulationEngine, presenter: Box<dyn Presenter>) -> Self {
        Self { engine, presenter }
    }

    /// Seed with the configured noise patch.
    pub fn seed(&mut self) -> Result<(), ArenaError> {
        self.engine.seed()
    }

    /// Execute one tick and present its final grid.
    ///
    /// # Errors
    ///
    /// [`TickError::NotSeeded`] before [`seed()`](Self::seed) or after
    /// [`reset()`](Self::reset).
    pub fn tick(&mut self) -> Result<TickResult<'_>, TickError> {
        let mut metrics = self.engine.tick()?;
        let present_us = self.engine.present(self.presenter.as_mut())?;
        metrics.total_us += present_us;
        metrics.present_us = present_us;
        Ok(TickResult {
            snapshot: self.engine.snapshot()?,
            metrics,
        })
    }

    /// Replace the parameters; the next tick uses them from its first sub-step.
    pub fn set_params(&mut self, params: SimParams) {
        self.engine.set_params(params);
    }

    /// Return to the unseeded state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The underlying engine.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// The presenter.
    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    /// Consume the driver, returning the engine.
    pub fn into_engine(self) -> SimulationEngine {
        self.engine
    }
}

impl std::fmt::Debug for LockstepSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepSim")
            .field("engine", &self.engine)
            .field("presenter", &self.presenter.name())
            .finish()
    }
}
