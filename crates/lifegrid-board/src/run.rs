//! Multi-generation batch runner.
//!
//! [`Board::run_generations`] advances a private working copy of a board by
//! `N` generations with two shortcuts:
//!
//! 1. **Stabilization**: the loop stops at the first step that does not
//!    mutate the board. The remaining steps would be no-ops, so the
//!    generation counter is fast-forwarded to where `N` steps would have
//!    left it.
//! 2. **Final-state contract**: with `expect_final_state`, a board that is
//!    still changing at step `N` gets one speculative frozen step. If that
//!    step would change the board again, the run reports
//!    [`RunOutcome::Unfinished`] and all work is discarded.

use lifegrid_core::{BoardError, MAX_GENERATION};
use tracing::debug;

use crate::board::Board;

/// Result of [`Board::run_generations`].
#[must_use]
#[derive(Debug)]
pub enum RunOutcome<'a> {
    /// The advanced working copy.
    Advanced(Board),
    /// The final-state expectation was not met. Carries the original,
    /// unmodified board.
    Unfinished(&'a Board),
}

impl<'a> RunOutcome<'a> {
    /// `true` if some advancement took effect.
    pub fn is_advanced(&self) -> bool {
        matches!(self, RunOutcome::Advanced(_))
    }

    /// The advanced board, or the original one on failure.
    pub fn board(&self) -> &Board {
        match self {
            RunOutcome::Advanced(board) => board,
            RunOutcome::Unfinished(original) => original,
        }
    }

    /// The advanced board, if the run succeeded.
    pub fn into_advanced(self) -> Option<Board> {
        match self {
            RunOutcome::Advanced(board) => Some(board),
            RunOutcome::Unfinished(_) => None,
        }
    }
}

impl Board {
    /// Advance a copy of this board by `generations` steps.
    ///
    /// `self` is never modified. With `expect_final_state` set, the run only
    /// succeeds if the board sits on a fixed point after exactly
    /// `generations` steps; otherwise [`RunOutcome::Unfinished`] hands back
    /// `self`.
    ///
    /// # Errors
    ///
    /// - [`BoardError::GenerationsOutOfRange`] if `generations` is 0.
    /// - [`BoardError::GenerationOverflow`] if the target generation would
    ///   exceed [`MAX_GENERATION`].
    pub fn run_generations(
        &self,
        generations: u64,
        expect_final_state: bool,
    ) -> Result<RunOutcome<'_>, BoardError> {
        if generations < 1 {
            return Err(BoardError::GenerationsOutOfRange {
                requested: generations,
            });
        }
        let target = self
            .generation()
            .checked_add(generations)
            .filter(|&g| g <= MAX_GENERATION)
            .ok_or(BoardError::GenerationOverflow {
                current: self.generation(),
                requested: generations,
            })?;

        let mut ran = self.working_copy();
        let mut executed = 0u64;
        while executed < generations {
            ran.next_generation();
            executed += 1;
            if !ran.has_mutated() {
                break;
            }
        }

        let reached = ran.generation();
        if expect_final_state && ran.has_mutated() && ran.step(true) {
            debug!(
                board = %self.id(),
                generations,
                "board still evolving after requested generations; discarding run"
            );
            return Ok(RunOutcome::Unfinished(self));
        }

        if executed < generations && !ran.has_mutated() {
            debug!(
                board = %self.id(),
                stabilized_at = reached,
                target,
                "population stable; fast-forwarding"
            );
            ran.force_generation(target)?;
        }

        Ok(RunOutcome::Advanced(ran))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::{BoardId, Cell};
    use lifegrid_test_utils::{cells_of, Pattern};

    fn board_of(p: Pattern, generation: u64) -> Board {
        Board::new(BoardId::new(), generation, p.cells()).unwrap()
    }

    #[test]
    fn zero_generations_rejected() {
        let board = board_of(Pattern::Block, 0);
        assert_eq!(
            board.run_generations(0, false).unwrap_err(),
            BoardError::GenerationsOutOfRange { requested: 0 }
        );
    }

    #[test]
    fn oscillator_at_max_generation_fails_final_state() {
        let board = board_of(Pattern::Blinker, MAX_GENERATION - 1);
        let outcome = board.run_generations(1, true).unwrap();
        assert!(!outcome.is_advanced());
        assert_eq!(outcome.board().generation(), MAX_GENERATION - 1);

        let ran = board.run_generations(1, false).unwrap().into_advanced().unwrap();
        assert_eq!(ran.generation(), MAX_GENERATION);
    }

    #[test]
    fn overflow_rejected() {
        let board = board_of(Pattern::Block, MAX_GENERATION - 1);
        assert!(matches!(
            board.run_generations(2, false),
            Err(BoardError::GenerationOverflow { .. })
        ));
        let ran = board.run_generations(1, false).unwrap();
        assert_eq!(ran.board().generation(), MAX_GENERATION);
    }

    #[test]
    fn blinker_runs_without_final_state() {
        let board = board_of(Pattern::Blinker, 0);
        let outcome = board.run_generations(15, false).unwrap();
        assert!(outcome.is_advanced());
        let ran = outcome.into_advanced().unwrap();
        assert_eq!(ran.generation(), 15);
        assert!(ran.has_mutated());
        assert_eq!(ran.population(), 3);
        assert_eq!(Some(ran.cells()), Pattern::Blinker.next_phase());
        // Input untouched.
        assert_eq!(board.generation(), 0);
        assert_eq!(board.cells(), Pattern::Blinker.cells());
    }

    #[test]
    fn blinker_rejects_final_state() {
        let board = board_of(Pattern::Blinker, 0);
        for n in [1, 2, 15, 100] {
            let outcome = board.run_generations(n, true).unwrap();
            assert!(!outcome.is_advanced());
            let original = outcome.board();
            assert!(std::ptr::eq(original, &board));
            assert_eq!(original.generation(), 0);
            assert!(!original.has_mutated());
            assert_eq!(original.population(), 3);
        }
    }

    #[test]
    fn still_life_fast_forwards() {
        for p in Pattern::STILL_LIFES {
            let board = board_of(p, 7);
            for n in [1, 2, 1_000, 1_000_000_000] {
                let ran = board.run_generations(n, false).unwrap().into_advanced().unwrap();
                assert_eq!(ran.generation(), 7 + n);
                assert_eq!(ran.cells(), p.cells());
                assert!(!ran.has_mutated());
            }
        }
    }

    #[test]
    fn still_life_accepts_final_state() {
        for p in Pattern::STILL_LIFES {
            let board = board_of(p, 0);
            for n in [1, 3, 50_000] {
                let ran = board.run_generations(n, true).unwrap().into_advanced().unwrap();
                assert_eq!(ran.generation(), n);
                assert_eq!(ran.cells(), p.cells());
            }
        }
    }

    #[test]
    fn lands_exactly_on_fixed_point() {
        // L-tromino becomes a block after one step; the block is stable.
        let board = Board::new(BoardId::new(), 0, cells_of(&[(0, 0), (0, 1), (1, 0)])).unwrap();
        let ran = board.run_generations(1, true).unwrap().into_advanced().unwrap();
        assert_eq!(ran.generation(), 1);
        assert_eq!(ran.cells(), Pattern::Block.cells());

        let ran = board.run_generations(10, true).unwrap().into_advanced().unwrap();
        assert_eq!(ran.generation(), 10);
        assert_eq!(ran.cells(), Pattern::Block.cells());
    }

    #[test]
    fn dying_pattern_fast_forwards_to_empty() {
        let board = Board::new(BoardId::new(), 0, cells_of(&[(0, 0), (5, 5)])).unwrap();
        let ran = board.run_generations(1_000, true).unwrap().into_advanced().unwrap();
        assert_eq!(ran.generation(), 1_000);
        assert_eq!(ran.population(), 0);
    }

    #[test]
    fn empty_board_advances() {
        let board = Board::new(BoardId::NONE, 0, Vec::<Cell>::new()).unwrap();
        let ran = board.run_generations(5, true).unwrap().into_advanced().unwrap();
        assert_eq!(ran.generation(), 5);
        assert_eq!(ran.id(), BoardId::NONE);
    }

    #[test]
    fn advanced_board_keeps_identity() {
        let board = board_of(Pattern::Toad, 3);
        let ran = board.run_generations(4, false).unwrap().into_advanced().unwrap();
        assert_eq!(ran.id(), board.id());
        assert_eq!(ran.generation(), 7);
    }
}
