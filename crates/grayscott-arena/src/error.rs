//! Accumulator error types.

use std::error::Error;
use std::fmt;

use grayscott_core::Extent;

/// Errors that can occur during accumulator operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A grid's extent does not match the accumulator's.
    ExtentMismatch {
        /// Extent of the accumulator.
        expected: Extent,
        /// Extent of the offered grid.
        actual: Extent,
    },
    /// The current grid was read before any grid was seeded.
    NotSeeded,
    /// `publish()` was called without a preceding `begin_step()`.
    NoStepInProgress,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentMismatch { expected, actual } => {
                write!(f, "grid extent {actual} does not match accumulator extent {expected}")
            }
            Self::NotSeeded => write!(f, "accumulator has not been seeded"),
            Self::NoStepInProgress => {
                write!(f, "publish() called without a preceding begin_step()")
            }
        }
    }
}

impl Error for ArenaError {}
