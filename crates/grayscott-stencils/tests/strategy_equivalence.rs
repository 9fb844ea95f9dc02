//! Integration test: the three Laplacian strategies are interchangeable.
//!
//! Fused and two-pass agree bit for bit; matrix convolution agrees within
//! `1e-5`. Every strategy honours its window's dependency region, so a
//! banded sub-step equals the serial one.

use grayscott_core::{Cell, Grid, SimParams, CHANNELS};
use grayscott_space::{EdgeBehavior, Rect};
use grayscott_stencil::{GridWindow, LaplacianStencil, ScratchRegion};
use grayscott_stencils::{step_into, step_with, Parallelism, StencilStrategy};
use grayscott_test_utils::{
    assert_grids_close, flat_grid, nan_outside, random_grid, spike_grid, CountingStencil,
    DirectStencil,
};
use proptest::prelude::*;

const EDGES: [EdgeBehavior; 2] = [EdgeBehavior::Clamp, EdgeBehavior::Wrap];

#[test]
fn neighbour_of_a_v_spike_gains_exactly_d_b_times_half() {
    let params = SimParams::default();
    let grid = spike_grid(8, 8, 3, 3, Cell::new(1.0, 0.5));
    for strategy in StencilStrategy::ALL {
        let next = step_with(&grid, &params, strategy, EdgeBehavior::Clamp);
        for (x, y) in [(3, 2), (3, 4), (2, 3), (4, 3)] {
            assert_eq!(
                next.cell(x, y).v,
                params.d_b * 0.5,
                "{strategy} at ({x},{y})"
            );
        }
        // Diagonals see no diffusion from a 5-point stencil.
        assert_eq!(next.cell(2, 2), Cell::QUIESCENT, "{strategy}");
    }
}

#[test]
fn quiescent_field_is_a_fixed_point() {
    let grid = flat_grid(10, 7, 1.0, 0.0);
    for strategy in StencilStrategy::ALL {
        for edge in EDGES {
            assert_eq!(step_with(&grid, &SimParams::default(), strategy, edge), grid);
        }
    }
}

#[test]
fn strategies_agree_on_a_random_field() {
    let grid = random_grid(23, 17, 11);
    let params = SimParams::default();
    for edge in EDGES {
        let fused = step_with(&grid, &params, StencilStrategy::Fused, edge);
        let two_pass = step_with(&grid, &params, StencilStrategy::TwoPass, edge);
        let conv = step_with(&grid, &params, StencilStrategy::MatrixConvolution, edge);
        assert_eq!(fused, two_pass);
        assert_grids_close(&conv, &fused, 1e-5);
    }
}

#[test]
fn production_strategies_match_the_longhand_reference() {
    let grid = random_grid(9, 12, 5);
    let params = SimParams::default();
    let mut reference = grid.clone();
    DirectStencil.step_rect(
        &GridWindow::full(&grid, EdgeBehavior::Wrap),
        &params,
        reference.samples_mut(),
        &mut ScratchRegion::default(),
    );
    for strategy in StencilStrategy::ALL {
        let next = step_with(&grid, &params, strategy, EdgeBehavior::Wrap);
        assert_grids_close(&next, &reference, 1e-5);
    }
}

#[test]
fn every_strategy_stays_inside_its_region() {
    let grid = random_grid(14, 11, 21);
    let params = SimParams::default();
    let rects = [Rect::new(5, 4, 3, 2), Rect::new(0, 0, 4, 3), Rect::new(10, 8, 4, 3)];
    for strategy in StencilStrategy::ALL {
        let stencil = strategy.stencil();
        for edge in EDGES {
            for rect in rects {
                let window = GridWindow::new(&grid, rect, edge).unwrap();
                let poisoned = nan_outside(&grid, window.region());
                let dirty_window = GridWindow::new(&poisoned, rect, edge).unwrap();

                let mut clean = vec![0.0; rect.cell_count() * CHANNELS];
                let mut dirty = clean.clone();
                let mut scratch = ScratchRegion::default();
                stencil.step_rect(&window, &params, &mut clean, &mut scratch);
                stencil.step_rect(&dirty_window, &params, &mut dirty, &mut scratch);
                assert_eq!(clean, dirty, "{strategy} {edge:?} {rect}");
            }
        }
    }
}

#[test]
fn bands_call_the_stencil_once_per_band() {
    let grid = random_grid(6, 10, 8);
    let mut out = Grid::filled(grid.extent(), Cell::default());
    let counting = CountingStencil::new(StencilStrategy::Fused.stencil());
    step_into(
        &counting,
        &grid,
        &mut out,
        &SimParams::default(),
        EdgeBehavior::Clamp,
        Parallelism::Bands { rows_per_band: 3 },
        &mut ScratchRegion::default(),
    )
    .unwrap();
    assert_eq!(counting.step_calls(), 4);
    assert_eq!(counting.output_rects(), Rect::full(grid.extent()).row_bands(3));
    assert_eq!(
        out,
        step_with(&grid, &SimParams::default(), StencilStrategy::Fused, EdgeBehavior::Clamp)
    );
}

#[test]
fn step_into_rejects_mismatched_extents() {
    let grid = random_grid(6, 6, 1);
    let mut out = flat_grid(6, 5, 1.0, 0.0);
    let err = step_into(
        StencilStrategy::TwoPass.stencil().as_ref(),
        &grid,
        &mut out,
        &SimParams::default(),
        EdgeBehavior::Clamp,
        Parallelism::Serial,
        &mut ScratchRegion::default(),
    );
    assert!(err.is_err());
}

fn grid_and_seed() -> impl Strategy<Value = (u32, u32, u64)> {
    (1u32..24, 1u32..24, any::<u64>())
}

proptest! {
    #[test]
    fn fused_equals_two_pass((w, h, seed) in grid_and_seed(), wrap in any::<bool>()) {
        let grid = random_grid(w, h, seed);
        let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Clamp };
        let params = SimParams::default();
        prop_assert_eq!(
            step_with(&grid, &params, StencilStrategy::Fused, edge),
            step_with(&grid, &params, StencilStrategy::TwoPass, edge)
        );
    }

    #[test]
    fn convolution_within_tolerance((w, h, seed) in grid_and_seed()) {
        let grid = random_grid(w, h, seed);
        let params = SimParams::default();
        let fused = step_with(&grid, &params, StencilStrategy::Fused, EdgeBehavior::Clamp);
        let conv = step_with(&grid, &params, StencilStrategy::MatrixConvolution, EdgeBehavior::Clamp);
        for (a, b) in fused.samples().iter().zip(conv.samples()) {
            prop_assert!((a - b).abs() <= 1e-5, "{} vs {}", a, b);
        }
    }

    #[test]
    fn laplacian_fields_agree_across_strategies((w, h, seed) in grid_and_seed(), wrap in any::<bool>()) {
        let grid = random_grid(w, h, seed);
        let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Clamp };
        let fused = StencilStrategy::Fused.stencil().compute_laplacian(&grid, edge);
        let two_pass = StencilStrategy::TwoPass.stencil().compute_laplacian(&grid, edge);
        prop_assert_eq!(fused.samples(), two_pass.samples());
        let conv = StencilStrategy::MatrixConvolution.stencil().compute_laplacian(&grid, edge);
        prop_assert!(fused.max_abs_diff(&conv) <= 1e-5, "diff {}", fused.max_abs_diff(&conv));
        let direct = DirectStencil.compute_laplacian(&grid, edge);
        prop_assert!(fused.max_abs_diff(&direct) <= 1e-5);
    }

    #[test]
    fn stepping_is_deterministic((w, h, seed) in grid_and_seed()) {
        let grid = random_grid(w, h, seed);
        let params = SimParams::default();
        for strategy in StencilStrategy::ALL {
            prop_assert_eq!(
                step_with(&grid, &params, strategy, EdgeBehavior::Clamp),
                step_with(&grid, &params, strategy, EdgeBehavior::Clamp)
            );
        }
    }
}
