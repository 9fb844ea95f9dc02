//! Grid extent (width × height) and row-major index arithmetic.

use std::fmt;

use crate::error::GridError;
use crate::grid::CHANNELS;

/// The immutable size of a simulation grid.
///
/// `x` runs along a row (`0..width`), `y` selects the row (`0..height`).
/// Construction rejects empty extents, so every `Extent` addresses at
/// least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    width: u32,
    height: u32,
}

impl Extent {
    /// Maximum size of either axis: coordinates are resolved as `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// The 640×640 extent of the reference simulation.
    pub const REFERENCE: Extent = Extent {
        width: 640,
        height: 640,
    };

    /// Create a new extent.
    ///
    /// Returns `Err(GridError::EmptyExtent)` if either axis is zero and
    /// `Err(GridError::ExtentOverflow)` if an axis exceeds [`Self::MAX_DIM`]
    /// or the sample count does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grayscott_core::Extent;
    ///
    /// let extent = Extent::new(8, 4).unwrap();
    /// assert_eq!(extent.cell_count(), 32);
    /// assert_eq!(extent.index(3, 1), 11);
    /// assert!(Extent::new(0, 4).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyExtent { width, height });
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(GridError::ExtentOverflow { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(CHANNELS))
            .ok_or(GridError::ExtentOverflow { width, height })?;
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of `f32` samples (`cell_count * CHANNELS`).
    pub fn sample_count(&self) -> usize {
        self.cell_count() * CHANNELS
    }

    /// Row-major cell index of `(x, y)`.
    ///
    /// The caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` lies inside the extent.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
