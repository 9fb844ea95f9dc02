//! Tick loop for [`RealtimeSim`](crate::RealtimeSim).
//!
//! The tick thread owns the [`SimulationEngine`] and the presenter
//! exclusively (moved in via `thread::spawn`). Requests and parameter
//! updates arrive over bounded crossbeam channels; the only lock is the
//! latest-snapshot slot, taken once per tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use grayscott_arena::OwnedSnapshot;
use grayscott_core::SimParams;

use crate::engine::SimulationEngine;
use crate::metrics::{RealtimeStats, TickMetrics};
use crate::present::Presenter;

/// Latest committed grid, shared between the tick thread and readers.
pub(crate) type LatestSlot = Arc<Mutex<Option<OwnedSnapshot>>>;

/// Store `snap` in the slot. A poisoned lock still holds a valid `Option`.
pub(crate) fn store_latest(slot: &LatestSlot, snap: OwnedSnapshot) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snap);
}

/// Counters shared with the handle.
#[derive(Debug, Default)]
pub(crate) struct SharedStats {
    pub ticks_run: AtomicU64,
    pub ticks_coalesced: AtomicU64,
    pub param_updates: AtomicU64,
}

impl SharedStats {
    pub fn load(&self) -> RealtimeStats {
        RealtimeStats {
            ticks_run: self.ticks_run.load(Ordering::Relaxed),
            ticks_coalesced: self.ticks_coalesced.load(Ordering::Relaxed),
            param_updates: self.param_updates.load(Ordering::Relaxed),
        }
    }
}

enum Wake {
    Tick,
    Stop,
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    engine: SimulationEngine,
    presenter: Box<dyn Presenter>,
    tick_rx: Receiver<()>,
    params_rx: Receiver<SimParams>,
    metrics_tx: Sender<TickMetrics>,
    latest: LatestSlot,
    stats: Arc<SharedStats>,
    tick_budget: Option<Duration>,
}

impl TickThreadState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        engine: SimulationEngine,
        presenter: Box<dyn Presenter>,
        tick_rx: Receiver<()>,
        params_rx: Receiver<SimParams>,
        metrics_tx: Sender<TickMetrics>,
        latest: LatestSlot,
        stats: Arc<SharedStats>,
        tick_rate_hz: Option<f64>,
    ) -> Self {
        Self {
            engine,
            presenter,
            tick_rx,
            params_rx,
            metrics_tx,
            latest,
            stats,
            tick_budget: tick_rate_hz.map(|hz| Duration::from_secs_f64(1.0 / hz)),
        }
    }

    /// Main tick loop. Runs until every request sender is dropped and the
    /// pending request, if any, has been served.
    ///
    /// Consumes self and returns the engine so that the caller can recover
    /// it via `JoinHandle<SimulationEngine>`.
    pub fn run(mut self) -> SimulationEngine {
        let mut deadline = self.tick_budget.map(|budget| Instant::now() + budget);
        loop {
            if let Wake::Stop = self.wait(deadline) {
                break;
            }
            let tick_start = Instant::now();

            // 1. Parameter updates land between ticks, never inside one.
            self.drain_params();

            // 2. Tick, present, publish.
            self.run_tick();

            // 3. Next self-driven tick is one budget after this one began.
            if let Some(budget) = self.tick_budget {
                deadline = Some((tick_start + budget).max(Instant::now()));
            }
        }
        self.engine
    }

    fn wait(&self, deadline: Option<Instant>) -> Wake {
        match deadline {
            None => match self.tick_rx.recv() {
                Ok(()) => Wake::Tick,
                Err(_) => Wake::Stop,
            },
            Some(deadline) => match self.tick_rx.recv_deadline(deadline) {
                Ok(()) | Err(RecvTimeoutError::Timeout) => Wake::Tick,
                Err(RecvTimeoutError::Disconnected) => Wake::Stop,
            },
        }
    }

    fn drain_params(&mut self) {
        while let Ok(params) = self.params_rx.try_recv() {
            self.engine.set_params(params);
            self.stats.param_updates.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn run_tick(&mut self) {
        let mut metrics = match self.engine.tick() {
            Ok(m) => m,
            // Nothing was published; the previous frame stays current.
            Err(_) => return,
        };
        if let Ok(present_us) = self.engine.present(self.presenter.as_mut()) {
            metrics.total_us += present_us;
            metrics.present_us = present_us;
        }
        if let Ok(snap) = self.engine.owned_snapshot() {
            store_latest(&self.latest, snap);
        }
        self.stats.ticks_run.fetch_add(1, Ordering::Relaxed);
        // Drop metrics nobody is reading.
        let _ = self.metrics_tx.try_send(metrics);
    }
}
