//! Error types for the board service.

use std::error::Error;
use std::fmt;

use lifegrid_core::{BoardError, BoardId};
use lifegrid_store::StoreError;
use lifegrid_view::ViewError;

/// Errors from [`BoardService`](crate::BoardService) operations.
///
/// The predicates ([`is_not_found`](Self::is_not_found),
/// [`is_invalid_argument`](Self::is_invalid_argument), ...) group variants
/// by kind so a transport layer can map them without matching every case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// No board has this id.
    NotFound(BoardId),
    /// The request exceeds the configured per-advance cap.
    GenerationLimitExceeded {
        /// The requested generation count.
        requested: u64,
        /// The configured cap.
        limit: u64,
    },
    /// `expect_final_state` was set and the board is still evolving after
    /// the requested generations. Nothing was persisted.
    FinalStateNotReached {
        /// The requested generation count.
        generations: u64,
    },
    /// The stored board changed between load and save. The computed state
    /// was discarded.
    Conflict(BoardId),
    /// The kernel rejected the request.
    Board(BoardError),
    /// The store failed.
    Store(StoreError),
    /// The presentation input is malformed.
    View(ViewError),
}

impl ServiceError {
    /// `true` for [`ServiceError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// `true` for a concurrent-update conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// `true` when the final-state precondition failed.
    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, Self::FinalStateNotReached { .. })
    }

    /// `true` for errors caused by caller input.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::GenerationLimitExceeded { .. } => true,
            Self::View(ViewError::Board(e)) | Self::Board(e) => {
                !matches!(e, BoardError::MutatedSinceLastGeneration)
            }
            Self::View(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "board {id} not found"),
            Self::GenerationLimitExceeded { requested, limit } => write!(
                f,
                "requested {requested} generations, limit is {limit}"
            ),
            Self::FinalStateNotReached { generations } => write!(
                f,
                "the board does not meet the required state after {generations} generation(s)"
            ),
            Self::Conflict(id) => write!(
                f,
                "board {id} changed concurrently; the computed state has been discarded"
            ),
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Store(e) => write!(f, "store: {e}"),
            Self::View(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::View(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ServiceError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ViewError> for ServiceError {
    fn from(e: ViewError) -> Self {
        Self::View(e)
    }
}
