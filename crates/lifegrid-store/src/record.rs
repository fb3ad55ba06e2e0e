//! The persisted form of a board.

use lifegrid_board::Board;
use lifegrid_core::{BoardError, BoardId, Cell, Coordinate};

/// A stored board: identity, generation and sorted live coordinates.
///
/// The mutation flag and scratch buffers are step-local state and are not
/// persisted; a rehydrated board starts with `has_mutated() == false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRecord {
    /// Board identifier.
    pub id: BoardId,
    /// Generation at the time of the write.
    pub generation: u64,
    /// Live coordinates, ascending.
    pub cells: Vec<Coordinate>,
}

impl BoardRecord {
    /// Rebuild a board from this record.
    pub fn to_board(&self) -> Result<Board, BoardError> {
        Board::new(self.id, self.generation, self.cells.iter().map(|&c| Cell::from(c)))
    }
}

impl From<&Board> for BoardRecord {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id(),
            generation: board.generation(),
            cells: board.iter().map(Cell::coordinate).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_test_utils::Pattern;

    #[test]
    fn round_trip() {
        let mut board = Board::new(BoardId::new(), 4, Pattern::Glider.cells()).unwrap();
        board.next_generation();
        let record = BoardRecord::from(&board);
        assert_eq!(record.generation, 5);
        assert!(record.cells.windows(2).all(|w| w[0] < w[1]));
        let back = record.to_board().unwrap();
        assert_eq!(back, board);
        assert!(!back.has_mutated());
    }
}
