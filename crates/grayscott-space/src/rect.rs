//! Axis-aligned cell rectangles.

use std::fmt;

use grayscott_core::Extent;

use crate::error::SpaceError;

/// A half-open rectangle of cells: columns `x..x + width`, rows
/// `y..y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// First column.
    pub x: u32,
    /// First row.
    pub y: u32,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering every cell of `extent`.
    pub fn full(extent: Extent) -> Self {
        Self::new(0, 0, extent.width(), extent.height())
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether cell `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check that the rectangle is non-empty and lies inside `extent`.
    pub fn check_within(&self, extent: Extent) -> Result<(), SpaceError> {
        if self.is_empty() {
            return Err(SpaceError::EmptyRect { rect: *self });
        }
        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= extent.width());
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= extent.height());
        if !fits_x || !fits_y {
            return Err(SpaceError::RectOutOfBounds {
                rect: *self,
                extent,
            });
        }
        Ok(())
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Split into horizontal bands of at most `rows_per_band` rows.
    ///
    /// Bands are returned top to bottom and partition the rectangle.
    /// `rows_per_band` of zero is treated as one.
    pub fn row_bands(&self, rows_per_band: u32) -> Vec<Rect> {
        let step = rows_per_band.max(1);
        let mut bands = Vec::with_capacity(self.height.div_ceil(step) as usize);
        let mut y = self.y;
        while y < self.bottom() {
            let h = step.min(self.bottom() - y);
            bands.push(Rect::new(self.x, y, self.width, h));
            y += h;
        }
        bands
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.x,
            self.right(),
            self.y,
            self.bottom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(w: u32, h: u32) -> Extent {
        Extent::new(w, h).unwrap()
    }

    #[test]
    fn full_rect_matches_extent() {
        let r = Rect::full(extent(7, 3));
        assert_eq!(r, Rect::new(0, 0, 7, 3));
        assert_eq!(r.cell_count(), 21);
    }

    #[test]
    fn check_within_rejects_overhang() {
        let e = extent(10, 10);
        assert!(Rect::new(2, 2, 8, 8).check_within(e).is_ok());
        assert_eq!(
            Rect::new(2, 2, 9, 8).check_within(e),
            Err(SpaceError::RectOutOfBounds {
                rect: Rect::new(2, 2, 9, 8),
                extent: e
            })
        );
        assert!(matches!(
            Rect::new(0, 0, 0, 3).check_within(e),
            Err(SpaceError::EmptyRect { .. })
        ));
    }

    #[test]
    fn check_within_survives_overflow() {
        let r = Rect::new(u32::MAX, 0, 2, 1);
        assert!(r.check_within(extent(4, 4)).is_err());
    }

    #[test]
    fn union_is_the_bounding_box() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.union(&b), Rect::new(0, 0, 6, 6));
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn row_bands_partition_the_rect() {
        let bands = Rect::new(1, 0, 5, 10).row_bands(4);
        assert_eq!(
            bands,
            vec![
                Rect::new(1, 0, 5, 4),
                Rect::new(1, 4, 5, 4),
                Rect::new(1, 8, 5, 2),
            ]
        );
        let covered: usize = bands.iter().map(Rect::cell_count).sum();
        assert_eq!(covered, 50);
    }

    #[test]
    fn zero_band_height_is_one_row() {
        assert_eq!(Rect::new(0, 0, 2, 3).row_bands(0).len(), 3);
    }
}
