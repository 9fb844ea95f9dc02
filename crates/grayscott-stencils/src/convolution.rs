//! Generic 3×3 convolution and the matrix-convolution strategy.

use grayscott_core::{Cell, Grid};
use grayscott_space::EdgeBehavior;
use grayscott_stencil::{GridWindow, LaplacianStencil};

/// A linear 3×3 filter applied to each channel independently.
///
/// `weights[row][col]` multiplies the sample at offset
/// `(col - 1, row - 1)`; `bias` is added to each channel afterwards.
///
/// ```
/// use grayscott_core::{Cell, Extent, Grid};
/// use grayscott_space::EdgeBehavior;
/// use grayscott_stencils::Convolution3x3;
///
/// let box_blur = Convolution3x3::new([[1.0 / 9.0; 3]; 3], 0.0);
/// let flat = Grid::filled(Extent::new(4, 4).unwrap(), Cell::new(0.5, 0.5));
/// let out = box_blur.convolve(&flat, EdgeBehavior::Clamp);
/// assert!((out.cell(1, 1).u - 0.5).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convolution3x3 {
    /// Row-major weights, centre at `[1][1]`.
    pub weights: [[f32; 3]; 3],
    /// Constant added per channel.
    pub bias: f32,
}

impl Convolution3x3 {
    /// Create a convolution.
    pub const fn new(weights: [[f32; 3]; 3], bias: f32) -> Self {
        Self { weights, bias }
    }

    /// The 5-point Laplacian `[[0,1,0],[1,-4,1],[0,1,0]]`.
    pub const fn laplacian() -> Self {
        Self::new([[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]], 0.0)
    }

    /// Evaluate the filter at `(x, y)`.
    #[inline]
    pub fn apply_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        let (xi, yi) = (x as i32, y as i32);
        let mut acc = Cell::new(self.bias, self.bias);
        for (dy, row) in (-1..=1).zip(&self.weights) {
            for (dx, &w) in (-1..=1).zip(row) {
                if w == 0.0 {
                    continue;
                }
                let s = window.sample(xi + dx, yi + dy);
                acc.u += w * s.u;
                acc.v += w * s.v;
            }
        }
        acc
    }

    /// Convolve a whole grid into a new grid of the same extent.
    pub fn convolve(&self, grid: &Grid, edge: EdgeBehavior) -> Grid {
        let window = GridWindow::full(grid, edge);
        Grid::from_fn(grid.extent(), |x, y| self.apply_at(&window, x, y))
    }
}

impl Default for Convolution3x3 {
    fn default() -> Self {
        Self::laplacian()
    }
}

/// Matrix-convolution stencil.
///
/// The Laplacian comes from a general [`Convolution3x3`] rather than a
/// hand-written 5-point sum, then feeds the reaction pass as in two-pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixConvolutionStencil {
    kernel: Convolution3x3,
}

impl MatrixConvolutionStencil {
    /// A stencil using the Laplacian weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stencil using an arbitrary kernel in place of the Laplacian.
    pub fn with_kernel(kernel: Convolution3x3) -> Self {
        Self { kernel }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &Convolution3x3 {
        &self.kernel
    }
}

impl LaplacianStencil for MatrixConvolutionStencil {
    fn name(&self) -> &str {
        "matrix-convolution"
    }

    fn laplacian_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        self.kernel.apply_at(window, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayscott_core::Extent;

    fn ramp() -> Grid {
        Grid::from_fn(Extent::new(6, 5).unwrap(), |x, y| {
            Cell::new((x * x) as f32 * 0.01, (y * 3 + x) as f32 * 0.02)
        })
    }

    #[test]
    fn laplacian_kernel_matches_five_point() {
        let g = ramp();
        for edge in [EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            let w = GridWindow::full(&g, edge);
            for y in 0..5 {
                for x in 0..6 {
                    let a = Convolution3x3::laplacian().apply_at(&w, x, y);
                    let b = crate::five_point(&w, x, y);
                    assert!((a.u - b.u).abs() < 1e-6, "u at ({x},{y})");
                    assert!((a.v - b.v).abs() < 1e-6, "v at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn identity_kernel_copies_grid() {
        let mut weights = [[0.0; 3]; 3];
        weights[1][1] = 1.0;
        let g = ramp();
        assert_eq!(Convolution3x3::new(weights, 0.0).convolve(&g, EdgeBehavior::Clamp), g);
    }

    #[test]
    fn bias_is_added_per_channel() {
        let g = Grid::filled(Extent::new(2, 2).unwrap(), Cell::new(0.0, 0.0));
        let out = Convolution3x3::new([[0.0; 3]; 3], 0.5).convolve(&g, EdgeBehavior::Wrap);
        assert!(out.samples().iter().all(|&s| s == 0.5));
    }

    #[test]
    fn shift_kernel_reads_west_neighbour() {
        let mut weights = [[0.0; 3]; 3];
        weights[1][0] = 1.0;
        let g = ramp();
        let out = Convolution3x3::new(weights, 0.0).convolve(&g, EdgeBehavior::Wrap);
        assert_eq!(out.cell(3, 2), g.cell(2, 2));
        assert_eq!(out.cell(0, 2), g.cell(5, 2));
    }
}
