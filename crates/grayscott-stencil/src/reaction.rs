//! The Gray-Scott reaction kernel.

use grayscott_core::{Cell, SimParams};

/// Advance one cell by one explicit Euler step of unit length.
///
/// ```text
/// rate = u * v * v
/// u'   = u + D_a * L_u - rate + f * (1 - u)
/// v'   = v + D_b * L_v + rate - (f + k) * v
/// ```
///
/// `lap` carries `(L_u, L_v)`. No clamping is applied. The expression is
/// evaluated exactly in the order above, so results are bit-reproducible.
///
/// ```
/// use grayscott_core::{Cell, SimParams};
/// use grayscott_stencil::react;
///
/// // The quiescent state is a fixed point.
/// let p = SimParams::default();
/// assert_eq!(react(Cell::QUIESCENT, Cell::new(0.0, 0.0), &p), Cell::QUIESCENT);
/// ```
#[inline]
pub fn react(cell: Cell, lap: Cell, params: &SimParams) -> Cell {
    let Cell { u, v } = cell;
    let rate = u * v * v;
    Cell {
        u: u + params.d_a * lap.u - rate + params.feed * (1.0 - u),
        v: v + params.d_b * lap.v + rate - (params.feed + params.kill) * v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_diffusion_of_inhibitor_is_exact() {
        // Quiescent neighbour of a v spike: only D_b * L_v survives.
        let p = SimParams::default();
        let out = react(Cell::QUIESCENT, Cell::new(0.0, 0.5), &p);
        assert_eq!(out.v, p.d_b * 0.5);
        assert_eq!(out.u, 1.0);
    }

    #[test]
    fn reaction_consumes_u_and_produces_v() {
        let p = SimParams::new(0.0, 0.0, 0.0, 0.0);
        let out = react(Cell::new(1.0, 0.5), Cell::default(), &p);
        assert_eq!(out.u, 0.75);
        assert_eq!(out.v, 0.75);
    }

    #[test]
    fn feed_pulls_u_towards_one() {
        let p = SimParams::new(0.0, 0.0, 0.0, 0.1);
        let out = react(Cell::new(0.5, 0.0), Cell::default(), &p);
        assert!((out.u - 0.55).abs() < 1e-7);
    }

    #[test]
    fn no_clamping_of_out_of_range_values() {
        let p = SimParams::default();
        let out = react(Cell::new(5.0, -1.0), Cell::new(100.0, -100.0), &p);
        assert!(out.u > 1.0);
        assert!(out.v < 0.0);
    }
}
