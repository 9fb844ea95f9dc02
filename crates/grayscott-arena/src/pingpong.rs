//! Double-buffered accumulator with index swap.
//!
//! [`PingPongBuffer`] keeps two grids that alternate between "current"
//! (readable) and "staging" (writable). The lifecycle per sub-step is:
//!
//! 1. `begin_step()`: borrow the current grid as input and the staging
//!    grid as output through a [`StepGuard`]
//! 2. the stencil writes every cell of `guard.output`
//! 3. `publish(tick)`: apply the storage format, flip the index, bump the
//!    generation
//! 4. `snapshot()`: borrow the new current grid

use grayscott_core::{Generation, Grid, TickId};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::read::{OwnedSnapshot, Snapshot};

/// Split borrow of the pair for one sub-step.
///
/// Created by [`PingPongBuffer::begin_step`]. Must be dropped before
/// [`PingPongBuffer::publish`], which the borrow checker enforces.
#[must_use]
pub struct StepGuard<'a> {
    /// The committed grid (read-only).
    pub input: &'a Grid,
    /// The staging grid. Every cell must be written before publishing;
    /// it holds stale data from two generations ago.
    pub output: &'a mut Grid,
}

/// Fixed pair of preallocated grids plus a "current" index.
///
/// # Buffer layout
///
/// ```text
/// grids[current]      ←── committed, returned by snapshot()
/// grids[1 - current]  ←── staging, written through StepGuard
/// ```
#[derive(Debug)]
pub struct PingPongBuffer {
    grids: [Grid; 2],
    current: usize,
    generation: Generation,
    last_tick_id: TickId,
    seeded: bool,
    step_in_progress: bool,
    config: ArenaConfig,
}

impl PingPongBuffer {
    /// Allocate both grids for `config`.
    ///
    /// The buffer starts unseeded; [`seed`](Self::seed) must be called
    /// before any step or read.
    pub fn new(config: ArenaConfig) -> Self {
        let blank = Grid::filled(config.extent, Default::default());
        Self {
            grids: [blank.clone(), blank],
            current: 0,
            generation: Generation(0),
            last_tick_id: TickId(0),
            seeded: false,
            step_in_progress: false,
            config,
        }
    }

    /// Load the initial grid.
    ///
    /// Copies `grid` into the current slot, applies the storage format,
    /// and resets the generation. Returns `Err(ArenaError::ExtentMismatch)`
    /// if the extent differs.
    pub fn seed(&mut self, grid: &Grid) -> Result<(), ArenaError> {
        self.check_extent(grid)?;
        let current = &mut self.grids[self.current];
        current.samples_mut().copy_from_slice(grid.samples());
        self.config.format.apply(current);
        self.generation = Generation(0);
        self.last_tick_id = TickId(0);
        self.seeded = true;
        self.step_in_progress = false;
        Ok(())
    }

    /// Borrow the committed grid as input and the staging grid as output.
    pub fn begin_step(&mut self) -> Result<StepGuard<'_>, ArenaError> {
        if !self.seeded {
            return Err(ArenaError::NotSeeded);
        }
        self.step_in_progress = true;
        let [a, b] = &mut self.grids;
        let (input, output) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        Ok(StepGuard { input, output })
    }

    /// Make the staging grid current.
    ///
    /// Returns `Err(ArenaError::NoStepInProgress)` unless `begin_step()`
    /// was called since the last publish.
    pub fn publish(&mut self, tick_id: TickId) -> Result<(), ArenaError> {
        if !self.step_in_progress {
            return Err(ArenaError::NoStepInProgress);
        }
        let staging = 1 - self.current;
        self.config.format.apply(&mut self.grids[staging]);
        self.current = staging;
        self.generation = Generation(self.generation.0 + 1);
        self.last_tick_id = tick_id;
        self.step_in_progress = false;
        Ok(())
    }

    /// Replace the committed grid with `grid` (copy, then publish).
    pub fn commit(&mut self, grid: &Grid, tick_id: TickId) -> Result<(), ArenaError> {
        self.check_extent(grid)?;
        let guard = self.begin_step()?;
        guard.output.samples_mut().copy_from_slice(grid.samples());
        self.publish(tick_id)
    }

    /// Borrow the committed grid.
    pub fn snapshot(&self) -> Result<Snapshot<'_>, ArenaError> {
        if !self.seeded {
            return Err(ArenaError::NotSeeded);
        }
        Ok(Snapshot::new(
            &self.grids[self.current],
            self.generation,
            self.last_tick_id,
        ))
    }

    /// Copy the committed grid into a thread-safe snapshot.
    pub fn owned_snapshot(&self) -> Result<OwnedSnapshot, ArenaError> {
        Ok(self.snapshot()?.to_owned_snapshot())
    }

    /// Return to the unseeded state. Both grids are kept allocated.
    pub fn reset(&mut self) {
        self.seeded = false;
        self.step_in_progress = false;
        self.current = 0;
        self.generation = Generation(0);
        self.last_tick_id = TickId(0);
    }

    /// Whether a grid has been seeded since construction or the last reset.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Number of publishes since seeding.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Bytes held by both grids.
    pub fn memory_bytes(&self) -> usize {
        self.config.memory_bytes()
    }

    fn check_extent(&self, grid: &Grid) -> Result<(), ArenaError> {
        if grid.extent() != self.config.extent {
            return Err(ArenaError::ExtentMismatch {
                expected: self.config.extent,
                actual: grid.extent(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StorageFormat;
    use grayscott_core::{Cell, Extent, GridRead};
    use proptest::prelude::*;

    fn config(w: u32, h: u32) -> ArenaConfig {
        ArenaConfig::new(Extent::new(w, h).unwrap())
    }

    fn seeded(w: u32, h: u32, cell: Cell) -> PingPongBuffer {
        let config = config(w, h);
        let mut buf = PingPongBuffer::new(config);
        buf.seed(&Grid::filled(config.extent, cell)).unwrap();
        buf
    }

    #[test]
    fn unseeded_buffer_refuses_reads_and_steps() {
        let mut buf = PingPongBuffer::new(config(4, 4));
        assert_eq!(buf.snapshot().unwrap_err(), ArenaError::NotSeeded);
        assert!(matches!(buf.begin_step(), Err(ArenaError::NotSeeded)));
    }

    #[test]
    fn seed_then_read_returns_seed() {
        let buf = seeded(3, 3, Cell::new(0.5, 0.25));
        let snap = buf.snapshot().unwrap();
        assert_eq!(snap.generation(), Generation(0));
        assert_eq!(snap.cell_at(2, 2), Cell::new(0.5, 0.25));
    }

    #[test]
    fn seed_rejects_wrong_extent() {
        let mut buf = PingPongBuffer::new(config(4, 4));
        let err = buf
            .seed(&Grid::filled(Extent::new(4, 5).unwrap(), Cell::QUIESCENT))
            .unwrap_err();
        assert!(matches!(err, ArenaError::ExtentMismatch { .. }));
        assert!(!buf.is_seeded());
    }

    #[test]
    fn step_writes_staging_and_publish_swaps() {
        let mut buf = seeded(2, 2, Cell::new(1.0, 0.0));
        {
            let guard = buf.begin_step().unwrap();
            assert_eq!(guard.input.cell(0, 0), Cell::new(1.0, 0.0));
            for y in 0..2 {
                for x in 0..2 {
                    let c = guard.input.cell(x, y);
                    guard.output.set_cell(x, y, Cell::new(c.u - 0.5, c.v + 0.5));
                }
            }
        }
        // Not yet visible.
        assert_eq!(buf.snapshot().unwrap().cell_at(1, 1), Cell::new(1.0, 0.0));
        buf.publish(TickId(1)).unwrap();
        let snap = buf.snapshot().unwrap();
        assert_eq!(snap.cell_at(1, 1), Cell::new(0.5, 0.5));
        assert_eq!(snap.generation(), Generation(1));
        assert_eq!(snap.tick_id(), TickId(1));
    }

    #[test]
    fn publish_without_step_is_rejected() {
        let mut buf = seeded(2, 2, Cell::QUIESCENT);
        assert_eq!(buf.publish(TickId(1)), Err(ArenaError::NoStepInProgress));
    }

    #[test]
    fn commit_replaces_current() {
        let mut buf = seeded(2, 2, Cell::QUIESCENT);
        let next = Grid::filled(Extent::new(2, 2).unwrap(), Cell::new(0.3, 0.7));
        buf.commit(&next, TickId(4)).unwrap();
        assert_eq!(buf.snapshot().unwrap().grid(), &next);
        assert_eq!(buf.generation(), Generation(1));
    }

    #[test]
    fn owned_snapshot_survives_later_commits() {
        let mut buf = seeded(2, 2, Cell::QUIESCENT);
        let before = buf.owned_snapshot().unwrap();
        let next = Grid::filled(Extent::new(2, 2).unwrap(), Cell::new(0.0, 1.0));
        buf.commit(&next, TickId(1)).unwrap();
        assert_eq!(before.cell_at(0, 0), Cell::QUIESCENT);
        assert_eq!(buf.snapshot().unwrap().cell_at(0, 0), Cell::new(0.0, 1.0));
    }

    #[test]
    fn unorm8_quantizes_seed_and_commits() {
        let mut cfg = config(1, 1);
        cfg.format = StorageFormat::Unorm8;
        let mut buf = PingPongBuffer::new(cfg);
        buf.seed(&Grid::filled(cfg.extent, Cell::new(1.5, 0.3)))
            .unwrap();
        let snap = buf.snapshot().unwrap();
        assert_eq!(snap.cell_at(0, 0).u, 1.0);
        assert_eq!(snap.cell_at(0, 0).v, (0.3f32 * 255.0).round() / 255.0);
    }

    #[test]
    fn reset_returns_to_unseeded() {
        let mut buf = seeded(2, 2, Cell::QUIESCENT);
        buf.commit(&Grid::filled(buf.config().extent, Cell::new(0.1, 0.1)), TickId(1))
            .unwrap();
        buf.reset();
        assert!(!buf.is_seeded());
        assert_eq!(buf.generation(), Generation(0));
        assert!(buf.snapshot().is_err());
    }

    proptest! {
        #[test]
        fn generation_counts_publishes(n in 0usize..20) {
            let mut buf = seeded(2, 2, Cell::QUIESCENT);
            for i in 0..n {
                let guard = buf.begin_step().unwrap();
                guard.output.copy_from(guard.input).unwrap();
                buf.publish(TickId(i as u64 + 1)).unwrap();
            }
            prop_assert_eq!(buf.generation(), Generation(n as u64));
        }
    }
}
