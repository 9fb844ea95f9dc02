//! Simulation driver for Gray-Scott reaction-diffusion.
//!
//! Provides the [`SimulationEngine`] that owns the ping-pong accumulator,
//! the configured stencil and the parameters, and runs `sub_steps`
//! sub-steps per tick. Two drivers sit on top of it:
//!
//! - [`LockstepSim`]: the caller ticks synchronously and gets a borrowed
//!   snapshot back.
//! - [`RealtimeSim`]: a dedicated tick thread owns the engine; tick
//!   requests are non-blocking and coalesce while a tick is in flight.
//!
//! Each tick's final grid is handed to a [`Presenter`], the boundary to
//! whatever displays the simulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod lockstep;
pub mod metrics;
pub mod present;
pub mod realtime;
mod tick_thread;

pub use config::{ConfigError, SimConfig};
pub use engine::{EngineState, SimulationEngine, TickError};
pub use lockstep::{LockstepSim, TickResult};
pub use metrics::{RealtimeStats, TickMetrics};
pub use present::{EdgePresenter, Presenter};
pub use realtime::{RealtimeSim, SubmitError, TickRequest};
