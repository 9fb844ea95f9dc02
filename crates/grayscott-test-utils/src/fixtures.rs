//! Grid fixtures.
//!
//! - [`flat_grid`]: every cell equal.
//! - [`spike_grid`]: quiescent background with one distinct cell.
//! - [`random_grid`]: reproducible noise in `[0, 1)` on both channels.
//! - [`nan_outside`]: a grid poisoned with NaN outside a window's
//!   dependency region, to prove a stencil never reads past it.

use grayscott_core::{Cell, Extent, Grid};
use grayscott_space::DependencyRegion;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `Extent::new(width, height)`, panicking on invalid input.
pub fn extent(width: u32, height: u32) -> Extent {
    Extent::new(width, height).expect("fixture extent must be valid")
}

/// A grid where every cell is `(u, v)`.
pub fn flat_grid(width: u32, height: u32, u: f32, v: f32) -> Grid {
    Grid::filled(extent(width, height), Cell::new(u, v))
}

/// A quiescent grid with `cell` at `(x, y)`.
pub fn spike_grid(width: u32, height: u32, x: u32, y: u32, cell: Cell) -> Grid {
    let mut grid = Grid::filled(extent(width, height), Cell::QUIESCENT);
    grid.set_cell(x, y, cell);
    grid
}

/// Uniform noise in `[0, 1)` on both channels, reproducible from `seed`.
pub fn random_grid(width: u32, height: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(extent(width, height), |_, _| {
        Cell::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0))
    })
}

/// Copy of `grid` with every cell outside `region` set to NaN.
pub fn nan_outside(grid: &Grid, region: &DependencyRegion) -> Grid {
    let mut poisoned = grid.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !region.contains(x, y) {
                poisoned.set_cell(x, y, Cell::new(f32::NAN, f32::NAN));
            }
        }
    }
    poisoned
}

/// Largest absolute sample difference. NaN on either side counts as infinite.
pub fn max_abs_diff(a: &Grid, b: &Grid) -> f32 {
    assert_eq!(a.extent(), b.extent(), "grids differ in extent");
    a.samples()
        .iter()
        .zip(b.samples())
        .map(|(x, y)| {
            let d = (x - y).abs();
            if d.is_nan() {
                f32::INFINITY
            } else {
                d
            }
        })
        .fold(0.0, f32::max)
}

/// Panic with the first offending cell if any sample differs by more than `tol`.
#[track_caller]
pub fn assert_grids_close(actual: &Grid, expected: &Grid, tol: f32) {
    assert_eq!(actual.extent(), expected.extent(), "grids differ in extent");
    for y in 0..actual.height() {
        for x in 0..actual.width() {
            let (a, e) = (actual.cell(x, y), expected.cell(x, y));
            let close = |p: f32, q: f32| (p - q).abs() <= tol;
            assert!(
                close(a.u, e.u) && close(a.v, e.v),
                "cell ({x},{y}): got {a:?}, expected {e:?} (tol {tol})"
            );
        }
    }
}
