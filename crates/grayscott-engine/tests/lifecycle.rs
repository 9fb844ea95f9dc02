//! Integration test: engine lifecycle through both drivers.

use std::time::Duration;

use grayscott_arena::ArenaError;
use grayscott_core::{Cell, Generation, Grid, GridRead, SimParams, TickId};
use grayscott_engine::{
    EngineState, LockstepSim, RealtimeSim, SimConfig, SimulationEngine, TickError, TickRequest,
};
use grayscott_stencils::{Parallelism, StencilStrategy};
use grayscott_test_utils::{extent, spike_grid, NullPresenter, RecordingPresenter};

fn small(strategy: StencilStrategy) -> SimConfig {
    let mut c = SimConfig::with_extent(8, 8);
    c.strategy = strategy;
    c.seeder.inset = 2;
    c.seeder.seed = Some(99);
    c
}

#[test]
fn one_sub_step_spike_diffusion_matches_for_every_strategy() {
    for strategy in StencilStrategy::ALL {
        let mut config = small(strategy);
        config.sub_steps = 1;
        let mut engine = SimulationEngine::new(config).unwrap();
        engine
            .seed_with_grid(&spike_grid(8, 8, 4, 4, Cell::new(1.0, 0.5)))
            .unwrap();
        engine.tick().unwrap();
        let snap = engine.snapshot().unwrap();
        let d_b = SimParams::default().d_b;
        for (x, y) in [(4, 3), (4, 5), (3, 4), (5, 4)] {
            assert_eq!(snap.cell_at(x, y).v, d_b * 0.5, "{strategy} at ({x},{y})");
        }
        assert!(snap.cell_at(4, 4).v < 0.5, "{strategy}");
    }
}

#[test]
fn not_seeded_until_seeded() {
    let mut sim = LockstepSim::new(small(StencilStrategy::Fused), Box::new(NullPresenter)).unwrap();
    assert!(matches!(sim.tick(), Err(TickError::NotSeeded)));
    assert_eq!(sim.engine().state(), EngineState::Uninitialized);
    sim.seed().unwrap();
    assert_eq!(sim.engine().state(), EngineState::Running);
    assert!(sim.tick().is_ok());
}

#[test]
fn presenter_sees_every_tick_in_order() {
    let recorder = RecordingPresenter::new();
    let log = recorder.log();
    let mut sim = LockstepSim::new(small(StencilStrategy::TwoPass), Box::new(recorder)).unwrap();
    sim.seed().unwrap();
    for _ in 0..4 {
        sim.tick().unwrap();
    }
    let frames = log.lock().unwrap().clone();
    let ticks: Vec<_> = frames.iter().map(|f| f.tick_id).collect();
    assert_eq!(ticks, vec![TickId(1), TickId(2), TickId(3), TickId(4)]);
    assert!(frames.iter().all(|f| f.generation == Generation(f.tick_id.0 * 5)));
}

#[test]
fn banded_engine_matches_serial_engine() {
    let run = |parallelism| {
        let mut config = SimConfig::with_extent(40, 37);
        config.seeder.inset = 10;
        config.seeder.seed = Some(5);
        config.parallelism = parallelism;
        let mut engine = SimulationEngine::new(config).unwrap();
        engine.seed().unwrap();
        for _ in 0..3 {
            engine.tick().unwrap();
        }
        engine.snapshot().unwrap().grid().clone()
    };
    assert_eq!(
        run(Parallelism::Serial),
        run(Parallelism::Bands { rows_per_band: 6 })
    );
}

#[test]
fn uniform_field_settles_on_a_homogeneous_steady_state() {
    // Without a spatial pattern the model reduces to its ODE, so a uniform
    // field must end on a root of both reaction balances.
    let mut config = small(StencilStrategy::Fused);
    config.sub_steps = 50;
    let (f, k) = (config.params.feed, config.params.kill);
    let mut engine = SimulationEngine::new(config).unwrap();
    engine
        .seed_with_grid(&Grid::filled(extent(8, 8), Cell::new(0.5, 0.25)))
        .unwrap();
    for _ in 0..40 {
        engine.tick().unwrap();
    }
    let c = engine.snapshot().unwrap().cell_at(3, 3);
    let uvv = c.u * c.v * c.v;
    assert!((f * (1.0 - c.u) - uvv).abs() < 1e-4, "feed balance at {c:?}");
    assert!(((f + k) * c.v - uvv).abs() < 1e-4, "kill balance at {c:?}");
    let states = SimParams::default().homogeneous_steady_states();
    assert!(
        states
            .iter()
            .any(|&(u, v)| (c.u - u).abs() < 1e-3 && (c.v - v).abs() < 1e-3),
        "{c:?} is not one of {states:?}"
    );
}

#[test]
fn seed_rejects_wrong_extent() {
    let mut engine = SimulationEngine::new(small(StencilStrategy::Fused)).unwrap();
    let err = engine
        .seed_with_grid(&Grid::filled(extent(4, 4), Cell::QUIESCENT))
        .unwrap_err();
    assert!(matches!(err, ArenaError::ExtentMismatch { .. }));
}

#[test]
fn realtime_hands_back_a_resumable_engine() {
    let sim = RealtimeSim::new(small(StencilStrategy::MatrixConvolution), Box::new(NullPresenter))
        .unwrap();
    assert_eq!(sim.request_tick().unwrap(), TickRequest::Accepted);
    sim.recv_metrics(Duration::from_secs(10)).unwrap();
    let mut engine = sim.shutdown().unwrap();
    assert_eq!(engine.current_tick(), TickId(1));

    let m = engine.tick().unwrap();
    assert_eq!(m.tick_id, TickId(2));
    assert_eq!(m.stencil, "matrix-convolution");

    // And back onto a thread without reseeding.
    let sim = RealtimeSim::from_engine(engine, Box::new(NullPresenter)).unwrap();
    assert_eq!(sim.latest().unwrap().tick_id(), TickId(2));
}
