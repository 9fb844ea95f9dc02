//! Single-pass strategy: Laplacian evaluated inline in the reaction.

use grayscott_core::{Cell, SimParams, CHANNELS};
use grayscott_stencil::{react, GridWindow, LaplacianStencil, ScratchRegion};

use crate::laplacian::five_point;

/// Fused sampling stencil.
///
/// Each output cell samples its four neighbours, forms the Laplacian and
/// applies the reaction in one go. No intermediate buffer exists and the
/// scratch region is never touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct FusedStencil;

impl LaplacianStencil for FusedStencil {
    fn name(&self) -> &str {
        "fused"
    }

    fn passes(&self) -> u32 {
        1
    }

    fn laplacian_at(&self, window: &GridWindow<'_>, x: u32, y: u32) -> Cell {
        five_point(window, x, y)
    }

    fn step_rect(
        &self,
        window: &GridWindow<'_>,
        params: &SimParams,
        out: &mut [f32],
        _scratch: &mut ScratchRegion,
    ) {
        let rect = window.output();
        debug_assert_eq!(out.len(), rect.cell_count() * CHANNELS);
        let mut i = 0;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let next = react(window.center(x, y), five_point(window, x, y), params);
                out[i] = next.u;
                out[i + 1] = next.v;
                i += CHANNELS;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayscott_core::{Extent, Grid};
    use grayscott_space::EdgeBehavior;

    #[test]
    fn fused_leaves_scratch_untouched() {
        let g = Grid::filled(Extent::new(4, 4).unwrap(), Cell::new(0.5, 0.25));
        let mut out = vec![0.0; g.samples().len()];
        let mut scratch = ScratchRegion::default();
        FusedStencil.step_rect(
            &GridWindow::full(&g, EdgeBehavior::Clamp),
            &SimParams::default(),
            &mut out,
            &mut scratch,
        );
        assert_eq!(scratch.capacity(), 0);
        assert!(out.iter().all(|v| v.is_finite()));
    }
}
