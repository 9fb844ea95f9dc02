//! Benchmark profiles for grayscott.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarks:
//!
//! - [`reference_profile`]: the 640×640 reference setup, 5 sub-steps per tick
//! - [`small_profile`]: 128×128 with a proportional patch, for quick runs
//! - [`profile_matrix`]: every strategy crossed with serial and banded execution

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grayscott_engine::SimConfig;
use grayscott_stencils::{Parallelism, StencilStrategy};

/// The reference setup: 640×640, default parameters, 5 sub-steps, a
/// 140×140 noise patch seeded from `seed`.
pub fn reference_profile(seed: u64, strategy: StencilStrategy) -> SimConfig {
    let mut config = SimConfig::default();
    config.strategy = strategy;
    config.seeder.seed = Some(seed);
    config
}

/// 128×128 with the patch inset scaled from the reference (250/640).
pub fn small_profile(seed: u64, strategy: StencilStrategy) -> SimConfig {
    let mut config = SimConfig::with_extent(128, 128);
    config.strategy = strategy;
    config.seeder.inset = 50;
    config.seeder.seed = Some(seed);
    config
}

/// Every strategy crossed with serial and banded execution, on the
/// reference profile. Labels read `"<strategy>/<serial|bands>"`.
pub fn profile_matrix(seed: u64) -> Vec<(String, SimConfig)> {
    let mut out = Vec::with_capacity(StencilStrategy::ALL.len() * 2);
    for strategy in StencilStrategy::ALL {
        for (label, parallelism) in [
            ("serial", Parallelism::Serial),
            ("bands", Parallelism::bands()),
        ] {
            let mut config = reference_profile(seed, strategy);
            config.parallelism = parallelism;
            out.push((format!("{strategy}/{label}"), config));
        }
    }
    out
}
