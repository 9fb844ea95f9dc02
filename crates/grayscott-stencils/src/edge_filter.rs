//! Edge-enhancing post-filter producing a displayable RGBA8 image.
//!
//! Each cell is mapped to the colour `(u, u, v, 1)`; the filter takes the
//! Sobel gradient magnitude of each colour channel, scales it by the
//! intensity and clamps to `[0, 1]`. Alpha of the output is always opaque.
//! Off-grid taps repeat the edge.

use grayscott_core::{Extent, GridRead};
use grayscott_space::EdgeBehavior;
use grayscott_stencil::GridWindow;

/// An RGBA8 image, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DisplayImage {
    /// Bytes per pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// A transparent black image.
    pub fn new(extent: Extent) -> Self {
        Self {
            width: extent.width(),
            height: extent.height(),
            pixels: vec![0; extent.cell_count() * Self::BYTES_PER_PIXEL],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Sobel edge filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFilter {
    /// Gradient magnitude multiplier.
    pub intensity: f32,
}

impl EdgeFilter {
    /// Default intensity.
    pub const DEFAULT_INTENSITY: f32 = 50.0;

    /// Create a filter with the given intensity.
    pub fn new(intensity: f32) -> Self {
        Self { intensity }
    }

    /// Filter `grid` into a new image.
    pub fn apply<G: GridRead + ?Sized>(&self, grid: &G) -> DisplayImage {
        let mut image = DisplayImage::new(grid.extent());
        self.apply_into(grid, &mut image);
        image
    }

    /// Filter `grid` into `image`, reallocating only if the size changed.
    pub fn apply_into<G: GridRead + ?Sized>(&self, grid: &G, image: &mut DisplayImage) {
        let extent = grid.extent();
        if image.width != extent.width() || image.height != extent.height() {
            *image = DisplayImage::new(extent);
        }
        let window = GridWindow::full(grid, EdgeBehavior::Clamp);
        let mut i = 0;
        for y in 0..extent.height() as i32 {
            for x in 0..extent.width() as i32 {
                let mut gx = [0.0f32; 2];
                let mut gy = [0.0f32; 2];
                for (dy, dx, wx, wy) in SOBEL_TAPS {
                    let c = window.sample(x + dx, y + dy);
                    gx[0] += wx * c.u;
                    gx[1] += wx * c.v;
                    gy[0] += wy * c.u;
                    gy[1] += wy * c.v;
                }
                let r = self.to_unorm8(gx[0].hypot(gy[0]));
                let b = self.to_unorm8(gx[1].hypot(gy[1]));
                image.pixels[i..i + 4].copy_from_slice(&[r, r, b, u8::MAX]);
                i += DisplayImage::BYTES_PER_PIXEL;
            }
        }
    }

    fn to_unorm8(&self, magnitude: f32) -> u8 {
        ((magnitude * self.intensity).clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTENSITY)
    }
}

/// `(dy, dx, x-weight, y-weight)` for the eight non-centre Sobel taps.
const SOBEL_TAPS: [(i32, i32, f32, f32); 8] = [
    (-1, -1, -1.0, -1.0),
    (-1, 0, 0.0, -2.0),
    (-1, 1, 1.0, -1.0),
    (0, -1, -2.0, 0.0),
    (0, 1, 2.0, 0.0),
    (1, -1, -1.0, 1.0),
    (1, 0, 0.0, 2.0),
    (1, 1, 1.0, 1.0),
];
