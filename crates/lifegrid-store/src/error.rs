//! Error types for board persistence.

use std::error::Error;
use std::fmt;

use lifegrid_core::BoardId;

/// Errors from a [`BoardStore`](crate::BoardStore).
///
/// A lost conditional update is not an error: it is reported as
/// `Ok(false)` from [`update`](crate::BoardStore::update).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A board with this id is already stored.
    DuplicateId(BoardId),
    /// The board carries the [`BoardId::NONE`] sentinel.
    MissingId,
    /// A stored record no longer describes a valid board.
    CorruptRecord {
        /// The record's id.
        id: BoardId,
        /// Why the record was rejected.
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "board {id} already exists"),
            Self::MissingId => write!(f, "board has no id"),
            Self::CorruptRecord { id, reason } => write!(f, "record {id} is corrupt: {reason}"),
        }
    }
}

impl Error for StoreError {}
