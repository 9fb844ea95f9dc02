//! Criterion benchmarks for whole ticks on the reference profile.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use grayscott_bench::{profile_matrix, reference_profile, small_profile};
use grayscott_engine::{LockstepSim, SimulationEngine};
use grayscott_stencils::StencilStrategy;
use grayscott_test_utils::NullPresenter;

fn bench_tick_640(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_640");
    group.sample_size(20);
    for (label, config) in profile_matrix(42) {
        let mut engine = SimulationEngine::new(config).unwrap();
        engine.seed().unwrap();
        // Warm up: first tick grows the scratch region.
        engine.tick().unwrap();
        group.bench_function(label, |b| {
            b.iter(|| black_box(engine.tick().unwrap()));
        });
    }
    group.finish();
}

fn bench_lockstep_with_present(c: &mut Criterion) {
    let config = reference_profile(42, StencilStrategy::Fused);
    let extent = grayscott_core::Extent::new(config.width, config.height).unwrap();
    let presenter = grayscott_engine::EdgePresenter::new(Default::default(), extent);
    let mut sim = LockstepSim::new(config, Box::new(presenter)).unwrap();
    sim.seed().unwrap();
    sim.tick().unwrap();

    c.bench_function("lockstep_640_edge_present", |b| {
        b.iter(|| {
            let result = sim.tick().unwrap();
            black_box(result.metrics.total_us);
        });
    });
}

fn bench_100_ticks_128(c: &mut Criterion) {
    c.bench_function("100_ticks_128", |b| {
        b.iter(|| {
            let config = small_profile(42, StencilStrategy::Fused);
            let mut sim = LockstepSim::new(config, Box::new(NullPresenter)).unwrap();
            sim.seed().unwrap();
            for _ in 0..100 {
                let result = sim.tick().unwrap();
                black_box(&result.snapshot);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tick_640,
    bench_lockstep_with_present,
    bench_100_ticks_128
);
criterion_main!(benches);
