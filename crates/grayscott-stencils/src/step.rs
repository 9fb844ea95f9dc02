//! One sub-step: stencil plus reaction over a whole grid.

use grayscott_core::{Grid, SimParams, CHANNELS};
use grayscott_space::{EdgeBehavior, Rect};
use grayscott_stencil::{GridWindow, LaplacianStencil, ScratchRegion};
use rayon::prelude::*;

use crate::error::StepError;
use crate::strategy::StencilStrategy;

/// How a sub-step is spread over threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Parallelism {
    /// One pass on the calling thread.
    #[default]
    Serial,
    /// Horizontal bands of `rows_per_band` rows, stepped in parallel on the
    /// rayon pool. Each band reads through a window limited to its
    /// dependency region.
    Bands {
        /// Rows per band; must be non-zero.
        rows_per_band: u32,
    },
}

impl Parallelism {
    /// Band height used by [`Parallelism::bands`].
    pub const DEFAULT_ROWS_PER_BAND: u32 = 32;

    /// Banded execution with the default band height.
    pub fn bands() -> Self {
        Self::Bands {
            rows_per_band: Self::DEFAULT_ROWS_PER_BAND,
        }
    }
}

/// Advance `grid` by one sub-step with clamp-to-edge boundaries.
///
/// Pure: the input is untouched and identical inputs give identical bits.
///
/// ```
/// use grayscott_core::{Cell, Extent, Grid, SimParams};
/// use grayscott_stencils::{step, StencilStrategy};
///
/// let grid = Grid::filled(Extent::new(8, 8).unwrap(), Cell::QUIESCENT);
/// let next = step(&grid, &SimParams::default(), StencilStrategy::Fused);
/// assert_eq!(next, grid);
/// ```
pub fn step(grid: &Grid, params: &SimParams, strategy: StencilStrategy) -> Grid {
    step_with(grid, params, strategy, EdgeBehavior::Clamp)
}

/// [`step`] with an explicit edge policy.
pub fn step_with(
    grid: &Grid,
    params: &SimParams,
    strategy: StencilStrategy,
    edge: EdgeBehavior,
) -> Grid {
    let stencil = strategy.stencil();
    let mut out = grid.clone();
    let mut scratch = ScratchRegion::default();
    stencil.step_rect(
        &GridWindow::full(grid, edge),
        params,
        out.samples_mut(),
        &mut scratch,
    );
    out
}

/// Advance `input` by one sub-step into `output` without allocating
/// (beyond scratch growth on first use).
///
/// Every cell of `output` is overwritten. Returns
/// `Err(StepError::ExtentMismatch)` if the two grids differ in extent.
pub fn step_into<S: LaplacianStencil + ?Sized>(
    stencil: &S,
    input: &Grid,
    output: &mut Grid,
    params: &SimParams,
    edge: EdgeBehavior,
    parallelism: Parallelism,
    scratch: &mut ScratchRegion,
) -> Result<(), StepError> {
    if input.extent() != output.extent() {
        return Err(StepError::ExtentMismatch {
            input: input.extent(),
            output: output.extent(),
        });
    }

    match parallelism {
        Parallelism::Serial => {
            let window = GridWindow::full(input, edge);
            stencil.step_rect(&window, params, output.samples_mut(), scratch);
            Ok(())
        }
        Parallelism::Bands { rows_per_band } => {
            let rows = rows_per_band.max(1);
            let row_len = input.width() as usize * CHANNELS;
            let bands = Rect::full(input.extent()).row_bands(rows);
            output
                .samples_mut()
                .par_chunks_mut(rows as usize * row_len)
                .zip(bands)
                .try_for_each_init(
                    ScratchRegion::default,
                    |band_scratch, (out, rect)| -> Result<(), StepError> {
                        let window = GridWindow::new(input, rect, edge)?;
                        stencil.step_rect(&window, params, out, band_scratch);
                        Ok(())
                    },
                )
        }
    }
}
