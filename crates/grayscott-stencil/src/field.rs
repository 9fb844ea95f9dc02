//! Intermediate Laplacian buffers.

use grayscott_core::{Cell, Extent, CHANNELS};

/// Per-cell Laplacian of both channels over a full grid.
///
/// Same layout as [`Grid`](grayscott_core::Grid): row-major, interleaved
/// `(L_u, L_v)` pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct LaplacianField {
    extent: Extent,
    data: Vec<f32>,
}

impl LaplacianField {
    /// A zero-filled field.
    pub fn zeroed(extent: Extent) -> Self {
        Self {
            extent,
            data: vec![0.0; extent.sample_count()],
        }
    }

    /// Extent of the field.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Interleaved `(L_u, L_v)` samples.
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Mutable interleaved samples.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Laplacian at `(x, y)`, returned as a [`Cell`] holding `(L_u, L_v)`.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> Cell {
        let i = self.extent.index(x, y) * CHANNELS;
        Cell::new(self.data[i], self.data[i + 1])
    }

    /// Largest absolute difference to `other`, over both channels.
    ///
    /// Returns `f32::INFINITY` if the extents differ.
    pub fn max_abs_diff(&self, other: &LaplacianField) -> f32 {
        if self.extent != other.extent {
            return f32::INFINITY;
        }
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }
}
