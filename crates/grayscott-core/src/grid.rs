//! The two-channel concentration grid.

use crate::error::GridError;
use crate::extent::Extent;
use crate::traits::GridRead;

/// Number of interleaved `f32` channels per cell (`u`, `v`).
pub const CHANNELS: usize = 2;

/// Selects one of the two species stored in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Activator concentration.
    U,
    /// Inhibitor concentration.
    V,
}

impl Channel {
    /// Both channels in storage order.
    pub const ALL: [Channel; CHANNELS] = [Channel::U, Channel::V];

    /// Offset of this channel inside a cell's sample pair.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Self::U => 0,
            Self::V => 1,
        }
    }
}

/// The concentrations held by one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    /// Activator concentration.
    pub u: f32,
    /// Inhibitor concentration.
    pub v: f32,
}

impl Cell {
    /// The quiescent state `u = 1, v = 0`: a homogeneous fixed point of
    /// the Gray-Scott reaction for every feed/kill pair.
    pub const QUIESCENT: Cell = Cell { u: 1.0, v: 0.0 };

    /// Create a cell from its two concentrations.
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Read a channel by selector.
    #[inline]
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::U => self.u,
            Channel::V => self.v,
        }
    }
}

/// A `width × height` grid of [`Cell`]s, stored as interleaved samples.
///
/// The extent is fixed at construction. Element-wise access goes through
/// [`cell`](Grid::cell)/[`set_cell`](Grid::set_cell); kernels work on the
/// raw sample slice directly (see the crate docs for the layout).
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    extent: Extent,
    data: Vec<f32>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`.
    pub fn filled(extent: Extent, cell: Cell) -> Self {
        let mut data = Vec::with_capacity(extent.sample_count());
        for _ in 0..extent.cell_count() {
            data.push(cell.u);
            data.push(cell.v);
        }
        Self { extent, data }
    }

    /// Create a grid by evaluating `f(x, y)` for every cell in row-major order.
    pub fn from_fn(extent: Extent, mut f: impl FnMut(u32, u32) -> Cell) -> Self {
        let mut data = Vec::with_capacity(extent.sample_count());
        for y in 0..extent.height() {
            for x in 0..extent.width() {
                let cell = f(x, y);
                data.push(cell.u);
                data.push(cell.v);
            }
        }
        Self { extent, data }
    }

    /// Wrap an existing interleaved sample buffer.
    ///
    /// Returns `Err(GridError::LengthMismatch)` unless
    /// `data.len() == extent.sample_count()`.
    pub fn from_samples(extent: Extent, data: Vec<f32>) -> Result<Self, GridError> {
        if data.len() != extent.sample_count() {
            return Err(GridError::LengthMismatch {
                expected: extent.sample_count(),
                actual: data.len(),
            });
        }
        Ok(Self { extent, data })
    }

    /// The grid's extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.extent.width()
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.extent.height()
    }

    /// Interleaved samples, row-major.
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Mutable interleaved samples, row-major.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the extent.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        let i = self.extent.index(x, y) * CHANNELS;
        Cell {
            u: self.data[i],
            v: self.data[i + 1],
        }
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the extent.
    #[inline]
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        let i = self.extent.index(x, y) * CHANNELS;
        self.data[i] = cell.u;
        self.data[i + 1] = cell.v;
    }

    /// Iterate one channel's values in row-major order.
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = f32> + '_ {
        self.data
            .iter()
            .skip(channel.offset())
            .step_by(CHANNELS)
            .copied()
    }

    /// Copy every sample from `other`.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if the extents differ.
    pub fn copy_from(&mut self, other: &Grid) -> Result<(), GridError> {
        if self.extent != other.extent {
            return Err(GridError::LengthMismatch {
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}

impl GridRead for Grid {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn samples(&self) -> &[f32] {
        &self.data
    }
}
