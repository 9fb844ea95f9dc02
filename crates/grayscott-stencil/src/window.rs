//! Edge-resolving, region-checked read access to a grid.

use grayscott_core::{Cell, Extent, GridRead, CHANNELS};
use grayscott_space::{resolve_axis, DependencyRegion, EdgeBehavior, Rect, SpaceError};

/// Read-only view of a grid for computing one output rectangle.
///
/// Every neighbour read goes through [`sample`](Self::sample), which
/// resolves out-of-range coordinates with the window's [`EdgeBehavior`].
/// In debug builds each resolved read is checked against the output's
/// [`DependencyRegion`]; a stencil that reaches further than one cell
/// panics there instead of silently depending on cells a tiled executor
/// may not have provided.
#[derive(Clone, Debug)]
pub struct GridWindow<'a> {
    samples: &'a [f32],
    extent: Extent,
    edge: EdgeBehavior,
    region: DependencyRegion,
}

impl<'a> GridWindow<'a> {
    /// A window for computing `output` from `grid`.
    ///
    /// Returns `Err` if `output` is empty or exceeds the grid.
    pub fn new<G: GridRead + ?Sized>(
        grid: &'a G,
        output: Rect,
        edge: EdgeBehavior,
    ) -> Result<Self, SpaceError> {
        let extent = grid.extent();
        let region = DependencyRegion::for_output(output, extent, edge)?;
        Ok(Self {
            samples: grid.samples(),
            extent,
            edge,
            region,
        })
    }

    /// A window whose output is the whole grid.
    pub fn full<G: GridRead + ?Sized>(grid: &'a G, edge: EdgeBehavior) -> Self {
        let extent = grid.extent();
        Self {
            samples: grid.samples(),
            extent,
            edge,
            region: DependencyRegion::whole(extent),
        }
    }

    /// The rectangle this window computes.
    pub fn output(&self) -> Rect {
        self.region.output()
    }

    /// The input cells this window may read.
    pub fn region(&self) -> &DependencyRegion {
        &self.region
    }

    /// Extent of the underlying grid.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Edge policy applied to out-of-range reads.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Read the cell at `(x, y)`, resolving off-grid coordinates.
    #[inline]
    pub fn sample(&self, x: i32, y: i32) -> Cell {
        let rx = resolve_axis(x, self.extent.width(), self.edge);
        let ry = resolve_axis(y, self.extent.height(), self.edge);
        debug_assert!(
            self.region.contains(rx, ry),
            "stencil read ({x},{y}) -> ({rx},{ry}) outside dependency region of {}",
            self.region.output()
        );
        let i = self.extent.index(rx, ry) * CHANNELS;
        Cell::new(self.samples[i], self.samples[i + 1])
    }

    /// Read an in-range cell.
    #[inline]
    pub fn center(&self, x: u32, y: u32) -> Cell {
        let i = self.extent.index(x, y) * CHANNELS;
        Cell::new(self.samples[i], self.samples[i + 1])
    }
}
