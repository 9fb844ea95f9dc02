//! Realtime (threaded) simulation.
//!
//! [`RealtimeSim`] moves the [`SimulationEngine`] and the presenter onto a
//! dedicated tick thread. Callers request ticks without blocking; a
//! request arriving while one is already pending is coalesced into it.
//!
//! # Architecture
//!
//! ```text
//! Caller thread(s)                 Tick thread
//!     |                                |
//!     |--request_tick()--------------->| tick_rx.recv()
//!     |   [tick_tx: bounded(1)]        | drain params_rx
//!     |--set_params()----------------->| engine.tick()
//!     |   [params_tx: bounded(64)]     | engine.present()
//!     |                                | latest <- owned_snapshot
//!     |<--recv_metrics()---------------| metrics_tx.try_send()
//!     |   [metrics: bounded(64)]       |
//! ```
//!
//! With `tick_rate_hz` set, the tick thread also wakes itself once per
//! tick budget.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use grayscott_arena::OwnedSnapshot;
use grayscott_core::SimParams;

use crate::config::{ConfigError, SimConfig};
use crate::engine::{EngineState, SimulationEngine};
use crate::metrics::{RealtimeStats, TickMetrics};
use crate::present::Presenter;
use crate::tick_thread::{store_latest, LatestSlot, SharedStats, TickThreadState};

const PARAMS_CHANNEL_CAPACITY: usize = 64;
const METRICS_CHANNEL_CAPACITY: usize = 64;

// ── Error types ──────────────────────────────────────────────────

/// Error submitting to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The parameter channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "parameter channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Outcome of [`RealtimeSim::request_tick()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickRequest {
    /// The request was queued and will produce a tick.
    Accepted,
    /// A request was already pending; this one folds into it.
    Coalesced,
}

// ── RealtimeSim ──────────────────────────────────────────────────

/// Threaded driver with non-blocking, coalescing tick requests.
pub struct RealtimeSim {
    tick_tx: Option<Sender<()>>,
    params_tx: Option<Sender<SimParams>>,
    metrics_rx: Receiver<TickMetrics>,
    latest: LatestSlot,
    stats: Arc<SharedStats>,
    tick_thread: Option<JoinHandle<SimulationEngine>>,
}

// Compile-time assertion: RealtimeSim is Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<RealtimeSim>();
};

impl RealtimeSim {
    /// Build, seed and start a simulation on its own tick thread.
    pub fn new(config: SimConfig, presenter: Box<dyn Presenter>) -> Result<Self, ConfigError> {
        Self::from_engine(SimulationEngine::new(config)?, presenter)
    }

    /// Start the tick thread around an existing engine, seeding it first
    /// if it is uninitialized.
    pub fn from_engine(
        mut engine: SimulationEngine,
        presenter: Box<dyn Presenter>,
    ) -> Result<Self, ConfigError> {
        if engine.state() == EngineState::Uninitialized {
            engine.seed()?;
        }
        let tick_rate_hz = engine.config().tick_rate_hz;

        let latest: LatestSlot = Arc::new(Mutex::new(None));
        if let Ok(snap) = engine.owned_snapshot() {
            store_latest(&latest, snap);
        }
        let stats = Arc::new(SharedStats::default());

        // Tick channel: bounded(1). A full slot means a tick is already pending.
        let (tick_tx, tick_rx) = crossbeam_channel::bounded(1);
        let (params_tx, params_rx) = crossbeam_channel::bounded(PARAMS_CHANNEL_CAPACITY);
        let (metrics_tx, metrics_rx) = crossbeam_channel::bounded(METRICS_CHANNEL_CAPACITY);

        let state = TickThreadState::new(
            engine,
            presenter,
            tick_rx,
            params_rx,
            metrics_tx,
            Arc::clone(&latest),
            Arc::clone(&stats),
            tick_rate_hz,
        );
        let tick_thread = thread::Builder::new()
            .name("grayscott-tick".into())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("tick thread: {e}"),
            })?;

        Ok(Self {
            tick_tx: Some(tick_tx),
            params_tx: Some(params_tx),
            metrics_rx,
            latest,
            stats,
            tick_thread: Some(tick_thread),
        })
    }

    /// Ask for one tick. Never blocks.
    pub fn request_tick(&self) -> Result<TickRequest, SubmitError> {
        let tx = self.tick_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        match tx.try_send(()) {
            Ok(()) => Ok(TickRequest::Accepted),
            Err(TrySendError::Full(())) => {
                self.stats.ticks_coalesced.fetch_add(1, Ordering::Relaxed);
                Ok(TickRequest::Coalesced)
            }
            Err(TrySendError::Disconnected(())) => Err(SubmitError::Shutdown),
        }
    }

    /// Queue new parameters for the next tick. Never blocks.
    pub fn set_params(&self, params: SimParams) -> Result<(), SubmitError> {
        let tx = self.params_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        tx.try_send(params).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// Wait up to `timeout` for the metrics of the next completed tick.
    pub fn recv_metrics(&self, timeout: Duration) -> Option<TickMetrics> {
        self.metrics_rx.recv_timeout(timeout).ok()
    }

    /// The most recently committed grid.
    pub fn latest(&self) -> Option<OwnedSnapshot> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cumulative counters.
    pub fn stats(&self) -> RealtimeStats {
        self.stats.load()
    }

    /// Stop the tick thread and recover the engine.
    ///
    /// A pending request is served before the thread exits.
    pub fn shutdown(mut self) -> Result<SimulationEngine, ConfigError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<SimulationEngine, ConfigError> {
        // Disconnecting both senders ends the tick loop.
        self.tick_tx.take();
        self.params_tx.take();
        let handle = self
            .tick_thread
            .take()
            .ok_or(ConfigError::EngineRecoveryFailed)?;
        handle.join().map_err(|_| ConfigError::EngineRecoveryFailed)
    }
}

impl Drop for RealtimeSim {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            let _ = self.stop();
        }
    }
}

impl std::fmt::Debug for RealtimeSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeSim")
            .field("running", &self.tick_thread.is_some())
            .field("stats", &self.stats.load())
            .finish_non_exhaustive()
    }
}
