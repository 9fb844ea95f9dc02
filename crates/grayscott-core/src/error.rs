//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`Grid`](crate::Grid) or [`Extent`](crate::Extent).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyExtent {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// `width * height * 2` does not fit in `usize`.
    ExtentOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The supplied sample buffer does not match the extent.
    LengthMismatch {
        /// Number of `f32` values the extent requires.
        expected: usize,
        /// Number of `f32` values supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { width, height } => {
                write!(f, "grid extent must be non-empty, got {width}x{height}")
            }
            Self::ExtentOverflow { width, height } => {
                write!(f, "grid extent {width}x{height} overflows addressable memory")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "grid data length {actual} does not match extent ({expected} values)")
            }
        }
    }
}

impl Error for GridError {}
