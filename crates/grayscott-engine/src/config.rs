//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`SimulationEngine`](crate::SimulationEngine).
//! [`validate()`](SimConfig::validate) checks every structural invariant
//! before anything is allocated; construction fails fast with no partial
//! state.

use std::error::Error;
use std::fmt;

use grayscott_arena::{ArenaError, StorageFormat};
use grayscott_core::{Extent, GridError, SimParams};
use grayscott_space::EdgeBehavior;
use grayscott_stencils::{Parallelism, SeedConfig, StencilStrategy};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or restarting a simulation.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid extent is invalid (zero or overflowing axis).
    Grid(GridError),
    /// Accumulator configuration is invalid.
    Arena(ArenaError),
    /// `sub_steps` is zero.
    ZeroSubSteps,
    /// `sub_steps` exceeds [`SimConfig::MAX_SUB_STEPS`].
    TooManySubSteps {
        /// The requested count.
        value: u32,
        /// The upper bound.
        max: u32,
    },
    /// tick_rate_hz is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// `Parallelism::Bands` with zero rows per band.
    InvalidBandSize,
    /// Seeder configuration failed validation.
    InvalidSeeder {
        /// Description of the validation failure.
        reason: String,
    },
    /// Engine could not be recovered from tick thread (e.g. thread panicked).
    EngineRecoveryFailed,
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::ZeroSubSteps => write!(f, "sub_steps must be at least 1"),
            Self::TooManySubSteps { value, max } => {
                write!(f, "sub_steps must be at most {max}, got {value}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::InvalidBandSize => write!(f, "rows_per_band must be at least 1"),
            Self::InvalidSeeder { reason } => write!(f, "invalid seeder: {reason}"),
            Self::EngineRecoveryFailed => {
                write!(f, "engine could not be recovered from tick thread")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid width in cells. Default: 640.
    pub width: u32,
    /// Grid height in cells. Default: 640.
    pub height: u32,
    /// Model parameters. Replaceable between ticks.
    pub params: SimParams,
    /// Laplacian execution strategy. Default: fused.
    pub strategy: StencilStrategy,
    /// Boundary policy for neighbour reads. Default: clamp.
    pub edge: EdgeBehavior,
    /// Sub-steps per tick. Default: 5. Range: `1..=MAX_SUB_STEPS`.
    pub sub_steps: u32,
    /// Initial condition.
    pub seeder: SeedConfig,
    /// Threading of each sub-step. Default: serial.
    pub parallelism: Parallelism,
    /// Optional self-driven tick rate for [`RealtimeSim`](crate::RealtimeSim).
    /// `None` ticks only on request.
    pub tick_rate_hz: Option<f64>,
    /// Storage precision of the accumulator. Default: `Float32`.
    pub storage: StorageFormat,
}

impl SimConfig {
    /// Default sub-steps per tick.
    pub const DEFAULT_SUB_STEPS: u32 = 5;

    /// Upper bound on sub-steps per tick.
    pub const MAX_SUB_STEPS: u32 = 1024;

    /// Default config at a different extent.
    pub fn with_extent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_extent().map(|_| ())
    }

    /// Validate and return the grid extent.
    pub(crate) fn validated_extent(&self) -> Result<Extent, ConfigError> {
        // 1. Extent must be non-empty and addressable.
        let extent = Extent::new(self.width, self.height)?;
        // 2. At least one sub-step per tick, and a bounded number of them.
        if self.sub_steps == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        if self.sub_steps > Self::MAX_SUB_STEPS {
            return Err(ConfigError::TooManySubSteps {
                value: self.sub_steps,
                max: Self::MAX_SUB_STEPS,
            });
        }
        // 3. tick_rate_hz, if present, must be finite and positive, and
        //    its reciprocal must also be finite (rejects subnormals where
        //    1.0/hz = inf, which would panic in Duration::from_secs_f64).
        if let Some(hz) = self.tick_rate_hz {
            if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
                return Err(ConfigError::InvalidTickRate { value: hz });
            }
        }
        // 4. Bands must hold at least one row.
        if let Parallelism::Bands { rows_per_band: 0 } = self.parallelism {
            return Err(ConfigError::InvalidBandSize);
        }
        // 5. Seeder noise range.
        self.seeder
            .validate()
            .map_err(|reason| ConfigError::InvalidSeeder { reason })?;
        Ok(extent)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: Extent::REFERENCE.width(),
            height: Extent::REFERENCE.height(),
            params: SimParams::default(),
            strategy: StencilStrategy::Fused,
            edge: EdgeBehavior::Clamp,
            sub_steps: Self::DEFAULT_SUB_STEPS,
            seeder: SeedConfig::default(),
            parallelism: Parallelism::Serial,
            tick_rate_hz: None,
            storage: StorageFormat::Float32,
        }
    }
}
