//! Boundary sampling policy.

/// How neighbour reads outside the grid are resolved.
///
/// Applied identically by every stencil strategy. Out-of-range reads are
/// never an error; they always land on a valid cell.
///
/// # Examples
///
/// ```
/// use grayscott_space::{resolve_axis, EdgeBehavior};
///
/// assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Clamp), 0);
/// assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), 4);
/// assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range reads return the nearest edge sample (clamp-to-edge).
    ///
    /// A boundary cell's missing neighbour is itself, so the boundary acts
    /// as a zero-flux wall.
    #[default]
    Clamp,
    /// Out-of-range reads wrap to the opposite side (torus).
    Wrap,
}

/// Resolve a single axis coordinate under `edge`.
///
/// `len` must be non-zero (guaranteed by [`Extent`](grayscott_core::Extent)).
#[inline]
pub fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> u32 {
    let n = len as i32;
    if val >= 0 && val < n {
        return val as u32;
    }
    match edge {
        EdgeBehavior::Clamp => val.clamp(0, n - 1) as u32,
        EdgeBehavior::Wrap => val.rem_euclid(n) as u32,
    }
}
