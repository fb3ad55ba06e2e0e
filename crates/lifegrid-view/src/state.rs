//! Input and output models of the matrix presentation.

use lifegrid_board::Board;
use lifegrid_core::BoardId;

use crate::error::ViewError;
use crate::matrix::MatrixFormat;

/// A board as supplied by a caller: a generation and the matrix rows.
///
/// The generation is signed because callers may send anything; negative
/// values are rejected by [`to_board`](Self::to_board).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Starting generation. Must be `>= 0`.
    pub generation: i64,
    /// Matrix rows.
    pub cells: Vec<String>,
}

impl BoardState {
    /// Build a state from rows given as string slices.
    pub fn new<I, S>(generation: i64, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            generation,
            cells: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Convert into a board with the given id.
    ///
    /// The matrix is checked before the generation.
    pub fn to_board(&self, id: BoardId, format: &MatrixFormat) -> Result<Board, ViewError> {
        let cells = format.parse(&self.cells)?;
        let generation = u64::try_from(self.generation).map_err(|_| {
            ViewError::NegativeGeneration {
                value: self.generation,
            }
        })?;
        Ok(Board::new(id, generation, cells)?)
    }
}

/// A board as returned to a caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    /// Board identifier.
    pub id: BoardId,
    /// Current generation.
    pub generation: u64,
    /// Rendered rows, padded by one dead cell on every side.
    pub cells: Vec<String>,
    /// Number of live cells.
    pub population: usize,
    /// Whether the last computed step changed the board.
    pub mutated: bool,
}

impl BoardView {
    /// Render `board` with `format`.
    pub fn of(board: &Board, format: &MatrixFormat) -> Self {
        Self {
            id: board.id(),
            generation: board.generation(),
            cells: format.render(board.iter()),
            population: board.population(),
            mutated: board.has_mutated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::BoardError;
    use lifegrid_test_utils::cells_of;

    #[test]
    fn valid_state_becomes_board() {
        let id = BoardId::new();
        let board = BoardState::new(0, ["1.", ".1"])
            .to_board(id, &MatrixFormat::default())
            .unwrap();
        assert_eq!(board.id(), id);
        assert_eq!(board.generation(), 0);
        assert_eq!(board.population(), 2);
        assert_eq!(board.cells(), cells_of(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn negative_generation_rejected() {
        let err = BoardState::new(-1, ["1.", ".1"])
            .to_board(BoardId::new(), &MatrixFormat::default())
            .unwrap_err();
        assert_eq!(err, ViewError::NegativeGeneration { value: -1 });
        assert_eq!(err.to_string(), "Generation must be greater than or equal to 0.");
    }

    #[test]
    fn matrix_checked_before_generation() {
        let err = BoardState::new(-1, ["X"])
            .to_board(BoardId::new(), &MatrixFormat::default())
            .unwrap_err();
        assert!(matches!(err, ViewError::InvalidCharacter { .. }));
    }

    #[test]
    fn max_generation_accepted() {
        let board = BoardState::new(i64::MAX, ["1"])
            .to_board(BoardId::new(), &MatrixFormat::default())
            .unwrap();
        assert_eq!(board.generation(), i64::MAX as u64);
        let err: ViewError = BoardError::MutatedSinceLastGeneration.into();
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn view_renders_with_padding() {
        let board = Board::new(BoardId::new(), 1, cells_of(&[(0, 0), (1, 1)])).unwrap();
        let view = BoardView::of(&board, &MatrixFormat::default());
        assert_eq!(view.generation, 1);
        assert_eq!(view.cells, vec!["....", ".1..", "..1.", "...."]);
        assert_eq!(view.population, 2);
        assert!(!view.mutated);
    }
}
