//! Reusable stencil fixtures.
//!
//! - [`DirectStencil`]: the 5-point Laplacian written out longhand, as a
//!   reference for the production strategies.
//! - [`CountingStencil`]: wraps another stencil, counting calls and
//!   recording the output rectangle of each.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use grayscott_core::{Cell, SimParams};
use grayscott_space::Rect;
use grayscott_stencil::{GridWindow, LaplacianStencil, ScratchRegion};

/// Longhand 5-point Laplacian with the default two-pass step.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectStencil;

impl LaplacianStencil for DirectStencil {
    fn name(&self) -> &str {
        "direct"
    }

    fn laplacian_at(&self, w: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        let (x, y) = (x as i32, y as i32);
        let n = w.sample(x, y - 1);
        let s = w.sample(x, y + 1);
        let e = w.sample(x + 1, y);
        let west = w.sample(x - 1, y);
        let c = w.sample(x, y);
        Cell::new(
            n.u + s.u + e.u + west.u - 4.0 * c.u,
            n.v + s.v + e.v + west.v - 4.0 * c.v,
        )
    }
}

/// Delegates to an inner stencil, counting `step_rect` calls.
///
/// Uses `AtomicUsize` so it stays `Sync` for banded execution.
pub struct CountingStencil {
    inner: Box<dyn LaplacianStencil>,
    step_calls: AtomicUsize,
    rects: Mutex<Vec<Rect>>,
}

impl CountingStencil {
    pub fn new(inner: Box<dyn LaplacianStencil>) -> Self {
        Self {
            inner,
            step_calls: AtomicUsize::new(0),
            rects: Mutex::new(Vec::new()),
        }
    }

    /// How many times `step_rect()` has been called.
    pub fn step_calls(&self) -> usize {
        self.step_calls.load(Ordering::Relaxed)
    }

    /// Output rectangles passed to `step_rect()`, sorted top to bottom.
    pub fn output_rects(&self) -> Vec<Rect> {
        let mut rects = self.rects.lock().unwrap().clone();
        rects.sort_by_key(|r| (r.y, r.x));
        rects
    }
}

impl LaplacianStencil for CountingStencil {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn passes(&self) -> u32 {
        self.inner.passes()
    }

    fn laplacian_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        self.inner.laplacian_at(window, x, y)
    }

    fn step_rect(
        &self,
        window: &GridWindow<'_>,
        params: &SimParams,
        out: &mut [f32],
        scratch: &mut ScratchRegion,
    ) {
        self.step_calls.fetch_add(1, Ordering::Relaxed);
        self.rects.lock().unwrap().push(window.output());
        self.inner.step_rect(window, params, out, scratch);
    }
}
