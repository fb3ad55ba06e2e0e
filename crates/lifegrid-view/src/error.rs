//! Error types for matrix conversion.

use std::error::Error;
use std::fmt;

use lifegrid_core::BoardError;

/// Errors converting presentation input into a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The input generation is negative.
    NegativeGeneration {
        /// The rejected value.
        value: i64,
    },
    /// A matrix character is neither the alive nor the dead marker.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Row index (`x`).
        row: i64,
        /// Column index (`y`).
        column: i64,
    },
    /// The kernel rejected the converted board.
    Board(BoardError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeGeneration { .. } => {
                write!(f, "Generation must be greater than or equal to 0.")
            }
            Self::InvalidCharacter {
                character,
                row,
                column,
            } => write!(
                f,
                "Invalid character '{character}' ({row}, {column}) found in matrix."
            ),
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ViewError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
