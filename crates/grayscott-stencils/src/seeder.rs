//! Initial condition: uniform background with a centred noise patch.
//!
//! The patch covers `[inset, width - inset) × [inset, height - inset)`.
//! Cells outside it are exactly the background; cells inside draw
//! independent uniform noise in `[noise_min, noise_max)` for the selected
//! channels. On the 640×640 reference grid with the default inset of 250
//! the patch is the central 140×140 cells.
//!
//! Uses a ChaCha8 RNG: a fixed seed reproduces the same grid on every
//! platform, no seed draws one from the thread RNG.

use grayscott_core::{Cell, Extent, Grid};
use grayscott_space::Rect;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Which channels the noise patch overwrites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatchChannels {
    /// Only `v`; `u` keeps the background value.
    #[default]
    V,
    /// Both `u` and `v` get independent noise.
    Both,
}

/// Seeder parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedConfig {
    /// Value of every cell outside the patch.
    pub background: Cell,
    /// Patch margin on every side, in cells.
    pub inset: u32,
    /// Channels receiving noise.
    pub channels: PatchChannels,
    /// Inclusive lower bound of the noise.
    pub noise_min: f32,
    /// Exclusive upper bound of the noise.
    pub noise_max: f32,
    /// RNG seed; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl SeedConfig {
    /// Default patch margin.
    pub const DEFAULT_INSET: u32 = 250;

    /// Check the noise range.
    pub fn validate(&self) -> Result<(), String> {
        if !self.noise_min.is_finite() || !self.noise_max.is_finite() {
            return Err(format!(
                "noise range must be finite, got [{}, {})",
                self.noise_min, self.noise_max
            ));
        }
        if self.noise_min >= self.noise_max {
            return Err(format!(
                "noise range must be non-empty, got [{}, {})",
                self.noise_min, self.noise_max
            ));
        }
        if !(self.noise_max - self.noise_min).is_finite() {
            return Err(format!(
                "noise range width must be finite, got [{}, {})",
                self.noise_min, self.noise_max
            ));
        }
        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            background: Cell::QUIESCENT,
            inset: Self::DEFAULT_INSET,
            channels: PatchChannels::V,
            noise_min: 0.0,
            noise_max: 1.0,
            seed: None,
        }
    }
}

/// Produces the initial grid.
#[derive(Clone, Debug, Default)]
pub struct NoisePatchSeeder {
    config: SeedConfig,
}

/// Builder for [`NoisePatchSeeder`]. Every field has a default.
#[derive(Clone, Debug, Default)]
pub struct NoisePatchSeederBuilder {
    config: SeedConfig,
}

impl NoisePatchSeeder {
    /// Create a new builder for configuring a `NoisePatchSeeder`.
    pub fn builder() -> NoisePatchSeederBuilder {
        NoisePatchSeederBuilder::default()
    }

    /// Build from a full config, validating it.
    pub fn from_config(config: SeedConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The seeder's config.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// The patch rectangle on `extent`, or `None` if the inset leaves no
    /// room for one.
    pub fn patch_rect(&self, extent: Extent) -> Option<Rect> {
        let inset = self.config.inset;
        let (w, h) = (extent.width(), extent.height());
        if inset.checked_mul(2).is_none_or(|twice| twice >= w || twice >= h) {
            return None;
        }
        Some(Rect::new(inset, inset, w - 2 * inset, h - 2 * inset))
    }

    /// Produce a grid of exactly `extent`.
    pub fn seed(&self, extent: Extent) -> Grid {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        self.seed_with(extent, &mut rng)
    }

    /// Produce a grid drawing noise from `rng`, row-major over the patch.
    pub fn seed_with<R: Rng + ?Sized>(&self, extent: Extent, rng: &mut R) -> Grid {
        let SeedConfig {
            background,
            channels,
            noise_min,
            noise_max,
            ..
        } = self.config;
        let mut grid = Grid::filled(extent, background);
        let Some(patch) = self.patch_rect(extent) else {
            return grid;
        };
        for y in patch.y..patch.bottom() {
            for x in patch.x..patch.right() {
                let cell = match channels {
                    PatchChannels::V => Cell::new(background.u, rng.random_range(noise_min..noise_max)),
                    PatchChannels::Both => {
                        let u = rng.random_range(noise_min..noise_max);
                        Cell::new(u, rng.random_range(noise_min..noise_max))
                    }
                };
                grid.set_cell(x, y, cell);
            }
        }
        grid
    }
}

impl NoisePatchSeederBuilder {
    /// Set the background cell (default: `u = 1, v = 0`).
    pub fn background(mut self, background: Cell) -> Self {
        self.config.background = background;
        self
    }

    /// Set the patch margin (default: 250).
    pub fn inset(mut self, inset: u32) -> Self {
        self.config.inset = inset;
        self
    }

    /// Set the noisy channels (default: `v` only).
    pub fn channels(mut self, channels: PatchChannels) -> Self {
        self.config.channels = channels;
        self
    }

    /// Set the noise range `[min, max)` (default: `[0, 1)`).
    pub fn noise_range(mut self, min: f32, max: f32) -> Self {
        self.config.noise_min = min;
        self.config.noise_max = max;
        self
    }

    /// Fix the RNG seed for reproducible grids.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the seeder, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the noise range is empty or not finite.
    pub fn build(self) -> Result<NoisePatchSeeder, String> {
        NoisePatchSeeder::from_config(self.config)
    }
}
