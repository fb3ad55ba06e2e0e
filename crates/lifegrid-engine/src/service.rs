//! The board service: create, read, advance and delete boards.

use tracing::{debug, info, warn};

use lifegrid_board::{Board, RunOutcome};
use lifegrid_core::{BoardId, Coordinate};
use lifegrid_store::BoardStore;
use lifegrid_view::{BoardState, BoardView};

use crate::config::{ConfigError, ServiceConfig};
use crate::error::ServiceError;

// ── AdvanceRequest ─────────────────────────────────────────────────

/// Parameters of [`BoardService::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceRequest {
    /// Number of generations to advance. Must be at least 1.
    pub generations: u64,
    /// Compute and return the result without persisting it.
    pub dry_run: bool,
    /// Only succeed if the board is on a fixed point after exactly
    /// `generations` steps.
    pub expect_final_state: bool,
}

impl AdvanceRequest {
    /// Advance by `generations`, persisting, with no final-state check.
    pub fn new(generations: u64) -> Self {
        Self {
            generations,
            dry_run: false,
            expect_final_state: false,
        }
    }

    /// Do not persist the result.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Require a fixed point after the requested generations.
    pub fn expect_final_state(mut self) -> Self {
        self.expect_final_state = true;
        self
    }
}

impl Default for AdvanceRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

// ── BoardService ───────────────────────────────────────────────────

/// Caller-facing board operations over a [`BoardStore`].
///
/// The service holds no board state of its own. Each advance loads a
/// fresh board, runs a private copy and persists it with a conditional
/// update keyed on the generation it loaded, so concurrent callers are
/// safe: of two advances racing from the same generation, one succeeds
/// and the other fails with [`ServiceError::Conflict`].
#[derive(Debug)]
pub struct BoardService<S> {
    store: S,
    config: ServiceConfig,
}

impl<S: BoardStore> BoardService<S> {
    /// Create a service after validating `config`.
    pub fn new(store: S, config: ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Create a board from the matrix presentation and persist it under a
    /// fresh id.
    pub fn create(&self, state: &BoardState) -> Result<BoardId, ServiceError> {
        let board = state.to_board(BoardId::new(), &self.config.format)?;
        self.insert(board)
    }

    /// Create a board from live coordinates and persist it under a fresh
    /// id.
    pub fn create_from_cells<I>(&self, generation: u64, cells: I) -> Result<BoardId, ServiceError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let board = Board::new(BoardId::new(), generation, cells.into_iter().map(Into::into))?;
        self.insert(board)
    }

    fn insert(&self, board: Board) -> Result<BoardId, ServiceError> {
        self.store.add(&board)?;
        info!(
            board = %board.id(),
            generation = board.generation(),
            population = board.population(),
            "board created"
        );
        Ok(board.id())
    }

    /// Load a board and render it.
    pub fn get(&self, id: &BoardId) -> Result<BoardView, ServiceError> {
        let board = self.load(id)?;
        Ok(BoardView::of(&board, &self.config.format))
    }

    /// Advance a stored board and return the resulting view.
    ///
    /// Unless `dry_run` is set, the result is persisted only if the
    /// stored board still has the generation observed at load time.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::GenerationLimitExceeded`] above the configured cap.
    /// - [`ServiceError::NotFound`] if no board has `id`.
    /// - [`ServiceError::Board`] for a zero count or generation overflow.
    /// - [`ServiceError::FinalStateNotReached`] if `expect_final_state`
    ///   is set and the board is still evolving. Nothing is persisted.
    /// - [`ServiceError::Conflict`] if another writer advanced the board
    ///   first. The computed state is discarded.
    pub fn advance(
        &self,
        id: &BoardId,
        request: AdvanceRequest,
    ) -> Result<BoardView, ServiceError> {
        let limit = self.config.max_generations_per_advance;
        if request.generations > limit {
            return Err(ServiceError::GenerationLimitExceeded {
                requested: request.generations,
                limit,
            });
        }

        let board = self.load(id)?;
        let original_generation = board.generation();
        let ran = match board.run_generations(request.generations, request.expect_final_state)? {
            RunOutcome::Advanced(ran) => ran,
            RunOutcome::Unfinished(_) => {
                debug!(
                    board = %id,
                    generations = request.generations,
                    "final state not reached"
                );
                return Err(ServiceError::FinalStateNotReached {
                    generations: request.generations,
                });
            }
        };

        if request.dry_run {
            debug!(board = %id, generation = ran.generation(), "dry run; not persisted");
        } else if self.store.update(&ran, original_generation)? {
            info!(
                board = %id,
                from = original_generation,
                to = ran.generation(),
                "board advanced"
            );
        } else {
            warn!(
                board = %id,
                expected = original_generation,
                "board changed concurrently; discarding advance"
            );
            return Err(ServiceError::Conflict(*id));
        }

        Ok(BoardView::of(&ran, &self.config.format))
    }

    /// Delete a board.
    pub fn delete(&self, id: &BoardId) -> Result<(), ServiceError> {
        if !self.store.remove(id)? {
            return Err(ServiceError::NotFound(*id));
        }
        info!(board = %id, "board deleted");
        Ok(())
    }

    fn load(&self, id: &BoardId) -> Result<Board, ServiceError> {
        self.store.get(id)?.ok_or(ServiceError::NotFound(*id))
    }
}
