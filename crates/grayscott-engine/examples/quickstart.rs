//! Gray-Scott quickstart: a seeded reference grid, ticked in lockstep.
//!
//! Demonstrates:
//!   1. Building a SimConfig (640×640, 5 sub-steps, fused stencil)
//!   2. Seeding the central noise patch
//!   3. Ticking with an edge-filter presenter and reading metrics
//!   4. Changing parameters between ticks
//!
//! Run with:
//!   cargo run --release --example quickstart

use grayscott_core::{Channel, SimParams};
use grayscott_engine::{EdgePresenter, LockstepSim, SimConfig};
use grayscott_stencils::EdgeFilter;

const TICKS: u64 = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimConfig::default();
    config.seeder.seed = Some(42);
    let extent = grayscott_core::Extent::new(config.width, config.height)?;

    let presenter = EdgePresenter::new(EdgeFilter::default(), extent);
    let mut sim = LockstepSim::new(config, Box::new(presenter))?;
    sim.seed()?;

    for n in 1..=TICKS {
        if n == TICKS / 2 {
            // Coral-growth regime for the second half.
            sim.set_params(SimParams::new(0.21, 0.105, 0.062, 0.055));
        }
        let result = sim.tick()?;
        if n % 20 == 0 {
            let m = &result.metrics;
            let v_mean: f32 = result.snapshot.grid().channel(Channel::V).sum::<f32>()
                / extent.cell_count() as f32;
            println!(
                "tick {:>4}  gen {:>5}  {:>6} us  (present {:>5} us)  mean v {:.5}",
                m.tick_id.0, m.generation.0, m.total_us, m.present_us, v_mean
            );
        }
    }
    Ok(())
}
