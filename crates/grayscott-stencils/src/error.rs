//! Errors from [`step_into`](crate::step_into).

use std::error::Error;
use std::fmt;

use grayscott_core::Extent;
use grayscott_space::SpaceError;

/// Errors from driving a stencil over caller-supplied buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// Input and output grids differ in extent.
    ExtentMismatch {
        /// Extent of the input grid.
        input: Extent,
        /// Extent of the output grid.
        output: Extent,
    },
    /// A band window could not be built.
    Space(SpaceError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentMismatch { input, output } => {
                write!(f, "input extent {input} does not match output extent {output}")
            }
            Self::Space(e) => write!(f, "band window: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::ExtentMismatch { .. } => None,
        }
    }
}

impl From<SpaceError> for StepError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
