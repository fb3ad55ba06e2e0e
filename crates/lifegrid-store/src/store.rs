//! The persistence boundary.

use lifegrid_board::Board;
use lifegrid_core::BoardId;

use crate::error::StoreError;

/// A keyed board store with optimistic concurrency.
///
/// Implementations must make [`update`](Self::update) atomic: the check of
/// `(id, original_generation)` and the replacement happen as one step, so
/// of two racing writers that loaded the same generation exactly one wins.
pub trait BoardStore: Send + Sync {
    /// Insert a new board.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is taken and with
    /// [`StoreError::MissingId`] for the [`BoardId::NONE`] sentinel.
    fn add(&self, board: &Board) -> Result<(), StoreError>;

    /// Load a board, or `None` if no board has this id.
    fn get(&self, id: &BoardId) -> Result<Option<Board>, StoreError>;

    /// Replace the stored board if it still has `board.id()` and
    /// `original_generation`.
    ///
    /// Returns `Ok(true)` if the record was replaced and `Ok(false)` if
    /// the condition did not hold (missing record or a concurrent writer
    /// already moved it on).
    fn update(&self, board: &Board, original_generation: u64) -> Result<bool, StoreError>;

    /// Delete a board. Returns `Ok(true)` if it existed.
    fn remove(&self, id: &BoardId) -> Result<bool, StoreError>;
}
