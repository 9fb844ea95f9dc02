//! Stencil dependency regions (regions of interest).
//!
//! A 3×3 stencil evaluated at a cell reads the cell and its eight
//! neighbours, so the input needed for an output rectangle `R` is `R`
//! grown by one cell on every side. Reads that fall off the grid are
//! resolved per axis by the [`EdgeBehavior`]:
//!
//! - **Clamp**: an out-of-range coordinate lands on the boundary row or
//!   column, which is already inside `R`, so the region is `R + 1` clipped.
//! - **Wrap**: an out-of-range coordinate lands on the opposite side, so
//!   each axis where `R` touches the boundary gains a one-cell span on the
//!   far side.
//!
//! Because resolution is per axis, the region is always the product of a
//! column set and a row set, each a union of at most three spans. That
//! caps a region at nine rectangles, all stored inline.

use grayscott_core::Extent;
use smallvec::SmallVec;

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::rect::Rect;

type Spans = SmallVec<[(u32, u32); 3]>;

/// Half-open spans of one axis read by a 3-wide stencil over `start..start + len`.
fn axis_spans(start: u32, len: u32, axis_len: u32, edge: EdgeBehavior) -> Spans {
    let mut spans = Spans::new();
    let end = start + len;
    spans.push((start.saturating_sub(1), (end + 1).min(axis_len)));
    if edge == EdgeBehavior::Wrap {
        if start == 0 {
            spans.push((axis_len - 1, axis_len));
        }
        if end == axis_len {
            spans.push((0, 1));
        }
    }
    spans
}

/// The set of input cells an output rectangle depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyRegion {
    output: Rect,
    rects: SmallVec<[Rect; 9]>,
}

impl DependencyRegion {
    /// Compute the region for `output` on a grid of `extent` under `edge`.
    ///
    /// Returns `Err` if `output` is empty or does not lie inside `extent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grayscott_core::Extent;
    /// use grayscott_space::{DependencyRegion, EdgeBehavior, Rect};
    ///
    /// let extent = Extent::new(16, 16).unwrap();
    /// let roi = DependencyRegion::for_output(Rect::new(4, 4, 2, 2), extent, EdgeBehavior::Clamp).unwrap();
    /// assert_eq!(roi.bounds(), Rect::new(3, 3, 4, 4));
    /// assert!(roi.contains(3, 3));
    /// assert!(!roi.contains(7, 4));
    /// ```
    pub fn for_output(
        output: Rect,
        extent: Extent,
        edge: EdgeBehavior,
    ) -> Result<Self, SpaceError> {
        output.check_within(extent)?;
        let cols = axis_spans(output.x, output.width, extent.width(), edge);
        let rows = axis_spans(output.y, output.height, extent.height(), edge);

        let mut rects = SmallVec::new();
        for &(y0, y1) in &rows {
            for &(x0, x1) in &cols {
                rects.push(Rect::new(x0, y0, x1 - x0, y1 - y0));
            }
        }
        Ok(Self { output, rects })
    }

    /// The region for an output covering the whole grid: every cell.
    ///
    /// Infallible, since every resolved read lands inside `extent`.
    pub fn whole(extent: Extent) -> Self {
        let full = Rect::full(extent);
        let mut rects = SmallVec::new();
        rects.push(full);
        Self {
            output: full,
            rects,
        }
    }

    /// The output rectangle this region serves.
    pub fn output(&self) -> Rect {
        self.output
    }

    /// The rectangles making up the region (may overlap).
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether input cell `(x, y)` belongs to the region.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Smallest rectangle containing the whole region.
    pub fn bounds(&self) -> Rect {
        // `for_output` always pushes the core rectangle first.
        self.rects[1..]
            .iter()
            .fold(self.rects[0], |acc, r| acc.union(r))
    }
}
