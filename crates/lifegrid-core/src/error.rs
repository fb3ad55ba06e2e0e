//! Error types for the simulation kernel.

use std::error::Error;
use std::fmt;

/// Errors raised by board construction, stepping control and identifiers.
///
/// `GenerationsOutOfRange`, `GenerationTooLarge`, `GenerationOutOfRange`,
/// `GenerationOverflow` and `InvalidId` are invalid-argument errors caused by caller input.
/// `MutatedSinceLastGeneration` is a contract violation inside the kernel
/// and is never triggered by valid external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A batch run was asked for fewer than one generation.
    GenerationsOutOfRange {
        /// The requested generation count.
        requested: u64,
    },
    /// A board was constructed above
    /// [`MAX_GENERATION`](crate::MAX_GENERATION).
    GenerationTooLarge {
        /// The rejected generation.
        requested: u64,
    },
    /// A generation value is below the current one or above
    /// [`MAX_GENERATION`](crate::MAX_GENERATION).
    GenerationOutOfRange {
        /// The rejected generation.
        requested: u64,
        /// The board's generation when the request was made.
        current: u64,
    },
    /// Advancing by the requested count would pass
    /// [`MAX_GENERATION`](crate::MAX_GENERATION).
    GenerationOverflow {
        /// The board's generation.
        current: u64,
        /// The requested generation count.
        requested: u64,
    },
    /// A forced fast-forward was attempted after the last step mutated
    /// the board.
    MutatedSinceLastGeneration,
    /// Text is not a well-formed board identifier.
    InvalidId {
        /// What is wrong with the text.
        reason: String,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationsOutOfRange { requested } => write!(
                f,
                "number of generations to run must be greater than 0, got {requested}"
            ),
            Self::GenerationTooLarge { requested } => write!(
                f,
                "generation {requested} exceeds the maximum of {}",
                crate::MAX_GENERATION
            ),
            Self::GenerationOutOfRange { requested, current } => write!(
                f,
                "generation {requested} is out of range (current {current}, max {})",
                crate::MAX_GENERATION
            ),
            Self::GenerationOverflow { current, requested } => write!(
                f,
                "advancing generation {current} by {requested} exceeds {}",
                crate::MAX_GENERATION
            ),
            Self::MutatedSinceLastGeneration => write!(
                f,
                "cannot set generation when the board has mutated from the last generation"
            ),
            Self::InvalidId { reason } => write!(f, "invalid board id: {reason}"),
        }
    }
}

impl Error for BoardError {}
