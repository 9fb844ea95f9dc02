//! Test utilities for grayscott development.
//!
//! Provides grid fixtures, reference and instrumented stencils, and
//! presenters that record what the engine hands them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod presenters;
pub mod stencils;

pub use fixtures::{
    assert_grids_close, extent, flat_grid, max_abs_diff, nan_outside, random_grid, spike_grid,
};
pub use presenters::{FrameRecord, NullPresenter, RecordingPresenter};
pub use stencils::{CountingStencil, DirectStencil};
