//! Error types for spatial queries.

use std::fmt;

use grayscott_core::Extent;

use crate::rect::Rect;

/// Errors arising from rectangle and region queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The rectangle has zero width or height.
    EmptyRect {
        /// The offending rectangle.
        rect: Rect,
    },
    /// The rectangle extends past the grid.
    RectOutOfBounds {
        /// The offending rectangle.
        rect: Rect,
        /// The grid it was checked against.
        extent: Extent,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRect { rect } => write!(f, "rectangle {rect} is empty"),
            Self::RectOutOfBounds { rect, extent } => {
                write!(f, "rectangle {rect} exceeds grid extent {extent}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
