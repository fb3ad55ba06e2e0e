//! Service configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use lifegrid_core::MAX_GENERATION;
use lifegrid_view::MatrixFormat;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ServiceConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_generations_per_advance` is zero.
    ZeroGenerationLimit,
    /// `max_generations_per_advance` exceeds the generation range.
    GenerationLimitTooLarge {
        /// The configured limit.
        value: u64,
        /// The largest accepted limit.
        max: u64,
    },
    /// The alive and dead markers are the same character.
    MarkerCollision {
        /// The shared marker.
        marker: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGenerationLimit => {
                write!(f, "max_generations_per_advance must be at least 1")
            }
            Self::GenerationLimitTooLarge { value, max } => {
                write!(f, "max_generations_per_advance {value} exceeds {max}")
            }
            Self::MarkerCollision { marker } => {
                write!(f, "alive and dead markers are both {marker:?}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ServiceConfig ──────────────────────────────────────────────────

/// Configuration for [`BoardService`](crate::BoardService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Largest generation count a single advance may request. The kernel
    /// has no cancellation points, so this cap is what bounds the work of
    /// one call. Default: 100 000.
    pub max_generations_per_advance: u64,
    /// Matrix markers used for input and output. Default: `'1'` / `'.'`.
    pub format: MatrixFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_generations_per_advance: 100_000,
            format: MatrixFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_generations_per_advance == 0 {
            return Err(ConfigError::ZeroGenerationLimit);
        }
        if self.max_generations_per_advance > MAX_GENERATION {
            return Err(ConfigError::GenerationLimitTooLarge {
                value: self.max_generations_per_advance,
                max: MAX_GENERATION,
            });
        }
        if self.format.alive == self.format.dead {
            return Err(ConfigError::MarkerCollision {
                marker: self.format.alive,
            });
        }
        Ok(())
    }
}
