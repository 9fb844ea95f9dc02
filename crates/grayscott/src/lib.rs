//! Gray-Scott reaction-diffusion on a two-channel grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all grayscott sub-crates. For most users, adding `grayscott` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grayscott::prelude::*;
//!
//! struct Discard;
//! impl Presenter for Discard {
//!     fn name(&self) -> &str { "discard" }
//!     fn present(&mut self, _frame: &Snapshot<'_>) {}
//! }
//!
//! let mut config = SimConfig::with_extent(64, 64);
//! config.seeder.inset = 24;
//! config.seeder.seed = Some(7);
//!
//! let mut sim = LockstepSim::new(config, Box::new(Discard)).unwrap();
//! sim.seed().unwrap();
//! let result = sim.tick().unwrap();
//! assert_eq!(result.snapshot.tick_id(), TickId(1));
//! assert_eq!(result.metrics.sub_steps(), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grayscott-core` | Extent, grid, cells, parameters, IDs |
//! | [`space`] | `grayscott-space` | Rectangles, edge policies, dependency regions |
//! | [`arena`] | `grayscott-arena` | Ping-pong accumulator, `Snapshot`, `OwnedSnapshot` |
//! | [`stencil`] | `grayscott-stencil` | Stencil trait, grid windows, reaction kernel |
//! | [`stencils`] | `grayscott-stencils` | Strategies, stepping, seeding, edge filter |
//! | [`engine`] | `grayscott-engine` | Engine, lockstep and realtime drivers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`grayscott-core`).
pub use grayscott_core as types;

/// Rectangles, edge policies and dependency regions (`grayscott-space`).
pub use grayscott_space as space;

/// Ping-pong accumulator and snapshots (`grayscott-arena`).
///
/// Most users only need [`arena::Snapshot`] and [`arena::OwnedSnapshot`]
/// from this module; both are also in the [`prelude`].
pub use grayscott_arena as arena;

/// The [`stencil::LaplacianStencil`] trait and its supporting types
/// (`grayscott-stencil`).
pub use grayscott_stencil as stencil;

/// Laplacian strategies, the sub-step pipeline, the seeder and the edge
/// filter (`grayscott-stencils`).
pub use grayscott_stencils as stencils;

/// Simulation engine and drivers (`grayscott-engine`).
///
/// [`engine::LockstepSim`] for caller-driven ticking,
/// [`engine::RealtimeSim`] for a background tick thread.
pub use grayscott_engine as engine;

/// Common imports for typical grayscott usage.
///
/// ```rust
/// use grayscott::prelude::*;
/// ```
pub mod prelude {
    // Snapshots
    pub use grayscott_arena::{OwnedSnapshot, Snapshot, StorageFormat};

    // Core types and traits
    pub use grayscott_core::{Cell, Extent, Generation, Grid, GridRead, SimParams, TickId};

    // Space
    pub use grayscott_space::{EdgeBehavior, Rect};

    // Stencils
    pub use grayscott_stencil::LaplacianStencil;
    pub use grayscott_stencils::{EdgeFilter, Parallelism, StencilStrategy};

    // Engine
    pub use grayscott_engine::{
        ConfigError, EdgePresenter, LockstepSim, Presenter, RealtimeSim, SimConfig,
        SimulationEngine, TickError, TickMetrics,
    };
}
