//! Spatial rules for Gray-Scott grids.
//!
//! This crate owns the two questions every stencil has to answer the
//! same way:
//!
//! - **Where does an out-of-range neighbour read land?** Answered by
//!   [`EdgeBehavior`] and [`resolve_axis`]. All three Laplacian
//!   strategies resolve coordinates through this one function, so they
//!   can never disagree on the boundary policy.
//! - **Which input cells does an output rectangle depend on?** Answered
//!   by [`DependencyRegion`], the region of interest used when a
//!   sub-step is tiled across threads or recomputed for a sub-rectangle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod rect;
pub mod region;

pub use edge::{resolve_axis, EdgeBehavior};
pub use error::SpaceError;
pub use rect::Rect;
pub use region::DependencyRegion;
