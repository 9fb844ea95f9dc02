//! Core types for Gray-Scott reaction-diffusion simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the grid
//! extent and two-channel [`Grid`] layout, the simulation parameters,
//! tick/generation identifiers, error types, and the [`GridRead`] trait.
//!
//! # Memory layout
//!
//! A grid is `width × height` cells stored row-major with the origin at
//! the top-left (row 0 is `y = 0`). Each cell holds two interleaved `f32`
//! channels, `u` then `v`:
//!
//! ```text
//! [u(0,0), v(0,0), u(1,0), v(1,0), ..., u(w-1,h-1), v(w-1,h-1)]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod grid;
pub mod id;
pub mod params;
pub mod traits;

pub use error::GridError;
pub use extent::Extent;
pub use grid::{Cell, Channel, Grid, CHANNELS};
pub use id::{Generation, TickId};
pub use params::SimParams;
pub use traits::GridRead;
