//! Two-pass strategy: Laplacian pass into scratch, then reaction pass.

use grayscott_core::Cell;
use grayscott_stencil::{GridWindow, LaplacianStencil};

use crate::laplacian::five_point;

/// Two-pass stencil.
///
/// The first pass writes the Laplacian of the whole output rectangle to a
/// scratch buffer; the second consumes the original grid plus that buffer.
/// Uses the trait's default `step_rect`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoPassStencil;

impl LaplacianStencil for TwoPassStencil {
    fn name(&self) -> &str {
        "two-pass"
    }

    fn laplacian_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        five_point(window, x, y)
    }
}
