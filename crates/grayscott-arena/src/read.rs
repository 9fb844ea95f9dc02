//! Read-only views of the committed grid.
//!
//! [`Snapshot`] borrows the current grid from a
//! [`PingPongBuffer`](crate::PingPongBuffer); [`OwnedSnapshot`] holds an
//! `Arc` copy that can cross threads. Both implement [`GridRead`].

use std::sync::Arc;

use grayscott_core::{Extent, Generation, Grid, GridRead, TickId};

/// A borrowed view of the committed grid.
///
/// The snapshot cannot outlive the buffer, and no step can begin while it
/// is alive, so the grid it exposes is immutable for its whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
    generation: Generation,
    tick_id: TickId,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(grid: &'a Grid, generation: Generation, tick_id: TickId) -> Self {
        Self {
            grid,
            generation,
            tick_id,
        }
    }

    /// The committed grid.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Number of publishes since seeding.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Tick that produced this grid (`TickId(0)` for the seed).
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Copy the grid into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            grid: Arc::new(self.grid.clone()),
            generation: self.generation,
            tick_id: self.tick_id,
        }
    }
}

impl GridRead for Snapshot<'_> {
    fn extent(&self) -> Extent {
        self.grid.extent()
    }

    fn samples(&self) -> &[f32] {
        self.grid.samples()
    }
}

/// An owned, shareable copy of a committed grid.
///
/// Cloning is a reference-count bump.
#[derive(Clone, Debug)]
pub struct OwnedSnapshot {
    grid: Arc<Grid>,
    generation: Generation,
    tick_id: TickId,
}

// Compile-time assertion: OwnedSnapshot must be Send + Sync.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OwnedSnapshot>();
};

impl OwnedSnapshot {
    /// The committed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of publishes since seeding.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Tick that produced this grid.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }
}

impl GridRead for OwnedSnapshot {
    fn extent(&self) -> Extent {
        self.grid.extent()
    }

    fn samples(&self) -> &[f32] {
        self.grid.samples()
    }
}
