//! Accumulator configuration.

use grayscott_core::Extent;

use crate::format::StorageFormat;

/// Configuration for a [`PingPongBuffer`](crate::PingPongBuffer).
///
/// Immutable after construction of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Extent shared by both grids of the pair.
    pub extent: Extent,
    /// How committed values are stored.
    pub format: StorageFormat,
}

impl ArenaConfig {
    /// Create a config for `extent` with `Float32` storage.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            format: StorageFormat::Float32,
        }
    }

    /// Bytes held by the two grids of the pair.
    pub fn memory_bytes(&self) -> usize {
        2 * self.extent.sample_count() * std::mem::size_of::<f32>()
    }
}
