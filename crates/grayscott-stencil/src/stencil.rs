//! The [`LaplacianStencil`] trait.
//!
//! A stencil turns a [`GridWindow`] into the next state of the window's
//! output rectangle. Strategies differ in how the Laplacian is evaluated
//! and whether an intermediate Laplacian buffer exists, never in the
//! numbers they produce beyond float reassociation.

use grayscott_core::{Cell, Grid, SimParams, CHANNELS};
use grayscott_space::EdgeBehavior;

use crate::field::LaplacianField;
use crate::reaction::react;
use crate::scratch::ScratchRegion;
use crate::window::GridWindow;

/// One Laplacian execution strategy.
///
/// # Contract
///
/// - All methods MUST be deterministic: same inputs produce identical
///   outputs.
/// - `&self`: stencils are stateless. Temporary storage goes through the
///   caller's [`ScratchRegion`].
/// - Reads MUST go through the window; they may reach at most one cell
///   beyond the output rectangle.
/// - `out` slices are rectangle-local: row-major over `window.output()`,
///   interleaved `(u, v)`, length `output.cell_count() * CHANNELS`.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the configured strategy
/// as `Box<dyn LaplacianStencil>`.
///
/// # Examples
///
/// A minimal stencil that evaluates the 5-point Laplacian directly:
///
/// ```
/// use grayscott_core::{Cell, Extent, Grid, SimParams};
/// use grayscott_space::EdgeBehavior;
/// use grayscott_stencil::{GridWindow, LaplacianStencil};
///
/// struct Direct;
///
/// impl LaplacianStencil for Direct {
///     fn name(&self) -> &str { "direct" }
///
///     fn laplacian_at(&self, w: &GridWindow<'_>, x: u32, y: u32) -> Cell {
///         let (x, y) = (x as i32, y as i32);
///         let (n, s, e, wst, c) = (w.sample(x, y - 1), w.sample(x, y + 1),
///             w.sample(x + 1, y), w.sample(x - 1, y), w.sample(x, y));
///         Cell::new(n.u + s.u + e.u + wst.u - 4.0 * c.u, n.v + s.v + e.v + wst.v - 4.0 * c.v)
///     }
/// }
///
/// let grid = Grid::filled(Extent::new(4, 4).unwrap(), Cell::QUIESCENT);
/// let lap = Direct.compute_laplacian(&grid, EdgeBehavior::Clamp);
/// assert!(lap.samples().iter().all(|&l| l == 0.0));
/// ```
pub trait LaplacianStencil: Send + Sync {
    /// Human-readable name for metrics and benchmark labels.
    fn name(&self) -> &str;

    /// Full passes over the output per sub-step.
    ///
    /// Default: 2 (Laplacian pass, then reaction pass).
    fn passes(&self) -> u32 {
        2
    }

    /// Laplacian `(L_u, L_v)` of the cell at `(x, y)`.
    fn laplacian_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell;

    /// Write the Laplacian of every cell of `window.output()` into `out`.
    fn laplacian_rect(&self, window: &GridWindow<'_>, out: &mut [f32]) {
        let rect = window.output();
        debug_assert_eq!(out.len(), rect.cell_count() * CHANNELS);
        let mut i = 0;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let l = self.laplacian_at(window, x, y);
                out[i] = l.u;
                out[i + 1] = l.v;
                i += CHANNELS;
            }
        }
    }

    /// Compute the next state of `window.output()` into `out`.
    ///
    /// The default runs two passes: the full Laplacian of the rectangle
    /// into scratch, then the reaction kernel over original plus
    /// Laplacian.
    fn step_rect(
        &self,
        window: &GridWindow<'_>,
        params: &SimParams,
        out: &mut [f32],
        scratch: &mut ScratchRegion,
    ) {
        let rect = window.output();
        debug_assert_eq!(out.len(), rect.cell_count() * CHANNELS);
        scratch.reset();
        let lap = scratch.alloc(rect.cell_count() * CHANNELS);
        self.laplacian_rect(window, lap);

        let mut i = 0;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let next = react(window.center(x, y), Cell::new(lap[i], lap[i + 1]), params);
                out[i] = next.u;
                out[i + 1] = next.v;
                i += CHANNELS;
            }
        }
    }

    /// Laplacian of the whole grid.
    fn compute_laplacian(&self, grid: &Grid, edge: EdgeBehavior) -> LaplacianField {
        let mut field = LaplacianField::zeroed(grid.extent());
        self.laplacian_rect(&GridWindow::full(grid, edge), field.samples_mut());
        field
    }
}
