//! Thread-safe in-memory board store.

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

use lifegrid_board::Board;
use lifegrid_core::BoardId;

use crate::error::StoreError;
use crate::record::BoardRecord;
use crate::store::BoardStore;

/// Reference [`BoardStore`] holding records in memory.
///
/// Records live in an insertion-ordered map behind a single
/// `parking_lot::RwLock`. Reads share the lock; `add`, `update` and
/// `remove` take it exclusively, which makes the conditional update an
/// atomic compare-and-replace.
#[derive(Debug, Default)]
pub struct InMemoryBoardStore {
    records: RwLock<IndexMap<BoardId, BoardRecord>>,
}

impl InMemoryBoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// `true` if no boards are stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Ids of all stored boards, in insertion order.
    pub fn ids(&self) -> Vec<BoardId> {
        self.records.read().keys().copied().collect()
    }

    /// The stored record for `id`, without rehydrating a board.
    pub fn record(&self, id: &BoardId) -> Option<BoardRecord> {
        self.records.read().get(id).cloned()
    }
}

impl BoardStore for InMemoryBoardStore {
    fn add(&self, board: &Board) -> Result<(), StoreError> {
        let id = board.id();
        if id.is_none() {
            return Err(StoreError::MissingId);
        }
        let mut records = self.records.write();
        if records.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        records.insert(id, BoardRecord::from(board));
        trace!(board = %id, generation = board.generation(), "record added");
        Ok(())
    }

    fn get(&self, id: &BoardId) -> Result<Option<Board>, StoreError> {
        let Some(record) = self.record(id) else {
            return Ok(None);
        };
        record
            .to_board()
            .map(Some)
            .map_err(|e| StoreError::CorruptRecord {
                id: *id,
                reason: e.to_string(),
            })
    }

    fn update(&self, board: &Board, original_generation: u64) -> Result<bool, StoreError> {
        let id = board.id();
        let mut records = self.records.write();
        match records.get_mut(&id) {
            Some(record) if record.generation == original_generation => {
                *record = BoardRecord::from(board);
                trace!(
                    board = %id,
                    from = original_generation,
                    to = board.generation(),
                    "record replaced"
                );
                Ok(true)
            }
            Some(record) => {
                trace!(
                    board = %id,
                    expected = original_generation,
                    stored = record.generation,
                    "conditional update rejected"
                );
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &BoardId) -> Result<bool, StoreError> {
        Ok(self.records.write().shift_remove(id).is_some())
    }
}
