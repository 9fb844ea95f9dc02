//! Read-only grid access shared by grids and published snapshots.

use crate::extent::Extent;
use crate::grid::{Cell, CHANNELS};

/// Read-only access to a committed grid.
///
/// Implemented by [`Grid`](crate::Grid) and by the arena's snapshot types,
/// so presenters and test helpers accept either without copying.
pub trait GridRead {
    /// Extent of the grid.
    fn extent(&self) -> Extent;

    /// Interleaved row-major samples (`u`, `v` per cell).
    fn samples(&self) -> &[f32];

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the extent.
    fn cell_at(&self, x: u32, y: u32) -> Cell {
        let i = self.extent().index(x, y) * CHANNELS;
        let s = self.samples();
        Cell {
            u: s[i],
            v: s[i + 1],
        }
    }
}
