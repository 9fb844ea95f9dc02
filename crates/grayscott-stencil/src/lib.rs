//! Laplacian stencil trait and reaction kernel for Gray-Scott simulations.
//!
//! A sub-step is "compute the Laplacian of both channels, then apply the
//! reaction". The [`LaplacianStencil`] trait abstracts *how* the
//! Laplacian is produced so that several execution strategies can sit
//! behind one capability, while [`react`] is the single shared reaction
//! kernel every strategy feeds.
//!
//! Stencils read their input through a [`GridWindow`], which resolves
//! out-of-range neighbours with the configured edge policy and, in debug
//! builds, checks that every read stays inside the window's dependency
//! region.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod reaction;
pub mod scratch;
pub mod stencil;
pub mod window;

pub use field::LaplacianField;
pub use reaction::react;
pub use scratch::ScratchRegion;
pub use stencil::LaplacianStencil;
pub use window::GridWindow;
