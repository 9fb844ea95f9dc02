//! Direct 5-point Laplacian shared by the fused and two-pass strategies.

use grayscott_core::Cell;
use grayscott_stencil::GridWindow;

/// `N + S + E + W - 4C` for both channels at `(x, y)`.
///
/// Neighbours are read through the window, so the edge policy applies.
/// The summation order is fixed; every caller gets identical bits.
#[inline]
pub fn five_point(window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
    let (xi, yi) = (x as i32, y as i32);
    let c = window.center(x, y);
    let n = window.sample(xi, yi - 1);
    let s = window.sample(xi, yi + 1);
    let e = window.sample(xi + 1, yi);
    let w = window.sample(xi - 1, yi);
    Cell {
        u: n.u + s.u + e.u + w.u - 4.0 * c.u,
        v: n.v + s.v + e.v + w.v - 4.0 * c.v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayscott_core::{Extent, Grid};
    use grayscott_space::EdgeBehavior;

    #[test]
    fn flat_field_has_zero_laplacian_everywhere() {
        let g = Grid::filled(Extent::new(5, 5).unwrap(), Cell::new(0.25, 0.75));
        for edge in [EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            let w = GridWindow::full(&g, edge);
            for y in 0..5 {
                for x in 0..5 {
                    assert_eq!(five_point(&w, x, y), Cell::new(0.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn spike_spreads_to_four_neighbours() {
        let mut g = Grid::filled(Extent::new(5, 5).unwrap(), Cell::new(0.0, 0.0));
        g.set_cell(2, 2, Cell::new(1.0, 0.5));
        let w = GridWindow::full(&g, EdgeBehavior::Clamp);
        assert_eq!(five_point(&w, 2, 2), Cell::new(-4.0, -2.0));
        assert_eq!(five_point(&w, 2, 1), Cell::new(1.0, 0.5));
        assert_eq!(five_point(&w, 3, 2), Cell::new(1.0, 0.5));
        assert_eq!(five_point(&w, 1, 1), Cell::new(0.0, 0.0));
    }

    #[test]
    fn clamped_corner_treats_missing_neighbours_as_self() {
        let g = Grid::from_fn(Extent::new(3, 3).unwrap(), |x, y| {
            Cell::new((x + 3 * y) as f32, 0.0)
        });
        let w = GridWindow::full(&g, EdgeBehavior::Clamp);
        // N = W = C = 0, S = 3, E = 1.
        assert_eq!(five_point(&w, 0, 0).u, 4.0);
    }

    #[test]
    fn wrapped_corner_reads_far_side() {
        let g = Grid::from_fn(Extent::new(3, 3).unwrap(), |x, y| {
            Cell::new((x + 3 * y) as f32, 0.0)
        });
        let w = GridWindow::full(&g, EdgeBehavior::Wrap);
        // N = 6, S = 3, E = 1, W = 2, C = 0.
        assert_eq!(five_point(&w, 0, 0).u, 12.0);
    }
}
