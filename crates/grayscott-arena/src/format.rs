//! Storage precision of committed grids.

use grayscott_core::Grid;

/// How the accumulator stores committed values.
///
/// The kernel always computes in `f32`; the format only affects what is
/// kept between sub-steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageFormat {
    /// Store kernel output verbatim.
    #[default]
    Float32,
    /// Store each channel as an 8-bit unsigned-normalised value, the way
    /// an RGBA8 render target would: `round(clamp(x, 0, 1) * 255) / 255`.
    Unorm8,
}

impl StorageFormat {
    /// Quantise a single sample.
    ///
    /// ```
    /// use grayscott_arena::StorageFormat;
    ///
    /// assert_eq!(StorageFormat::Float32.quantize(1.7), 1.7);
    /// assert_eq!(StorageFormat::Unorm8.quantize(1.7), 1.0);
    /// assert_eq!(StorageFormat::Unorm8.quantize(0.5), 128.0 / 255.0);
    /// ```
    #[inline]
    pub fn quantize(self, x: f32) -> f32 {
        match self {
            Self::Float32 => x,
            Self::Unorm8 => (x.clamp(0.0, 1.0) * 255.0).round() / 255.0,
        }
    }

    /// Quantise every sample of `grid` in place. No-op for `Float32`.
    pub fn apply(self, grid: &mut Grid) {
        if self == Self::Float32 {
            return;
        }
        for s in grid.samples_mut() {
            *s = self.quantize(*s);
        }
    }
}
