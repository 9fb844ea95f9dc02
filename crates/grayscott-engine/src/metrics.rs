//! Per-tick performance metrics for the simulation engine.
//!
//! [`TickMetrics`] captures timing for a single tick; [`RealtimeStats`]
//! accumulates counters on the realtime tick thread.

use grayscott_core::{Generation, TickId};

/// Timing metrics collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// The tick these metrics describe.
    pub tick_id: TickId,
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Per-sub-step execution times, in order.
    pub sub_step_us: Vec<u64>,
    /// Time spent in the presenter, in microseconds (0 if none ran).
    pub present_us: u64,
    /// Name of the stencil strategy that ran.
    pub stencil: &'static str,
    /// Accumulator generation after the tick.
    pub generation: Generation,
}

impl TickMetrics {
    /// Number of sub-steps executed.
    pub fn sub_steps(&self) -> usize {
        self.sub_step_us.len()
    }
}

/// Cumulative counters of a [`RealtimeSim`](crate::RealtimeSim).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealtimeStats {
    /// Ticks executed by the tick thread.
    pub ticks_run: u64,
    /// Tick requests dropped because one was already pending.
    pub ticks_coalesced: u64,
    /// Parameter updates applied between ticks.
    pub param_updates: u64,
}
