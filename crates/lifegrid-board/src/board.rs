//! The board: one simulation instance's generation counter and live set.
//!
//! # Double buffering
//!
//! A board owns two `BTreeSet<Cell>` buffers. Each step computes the next
//! generation into the scratch buffer and then swaps the two, so the
//! following step reuses the previous generation's storage instead of
//! allocating a fresh set.
//!
//! ```text
//! cells:      live set of generation g      ──┐ swap after step
//! next_cells: scratch, cleared before reuse ──┘
//! ```

use std::collections::BTreeSet;
use std::fmt;

use lifegrid_core::{BoardError, BoardId, Cell, MAX_GENERATION};

use crate::transition;

/// A sparse Game of Life board.
///
/// Invariant: `cells` holds exactly the live cells, every one with an
/// [`Alive`](lifegrid_core::Liveness::Alive) payload. Dead cells are never
/// stored.
pub struct Board {
    id: BoardId,
    generation: u64,
    cells: BTreeSet<Cell>,
    next_cells: BTreeSet<Cell>,
    mutated: bool,
}

impl Board {
    /// Create a board at `generation` seeded with the live cells among
    /// `cells`. Cells with a dead payload are dropped.
    ///
    /// Returns `Err(BoardError::GenerationTooLarge)` if `generation`
    /// exceeds [`MAX_GENERATION`].
    pub fn new<I>(id: BoardId, generation: u64, cells: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if generation > MAX_GENERATION {
            return Err(BoardError::GenerationTooLarge {
                requested: generation,
            });
        }
        Ok(Self {
            id,
            generation,
            cells: cells.into_iter().filter(Cell::is_alive).collect(),
            next_cells: BTreeSet::new(),
            mutated: false,
        })
    }

    /// Identifier of this board. Fixed at construction.
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` if the most recent step changed the live set.
    ///
    /// A freshly constructed board reports `false`.
    pub fn has_mutated(&self) -> bool {
        self.mutated
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `cell`'s coordinate is alive; the payload is ignored.
    pub fn is_alive(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Independent snapshot of the live set.
    ///
    /// The board keeps exclusive ownership of its working buffers; callers
    /// get a copy they may modify freely.
    pub fn cells(&self) -> BTreeSet<Cell> {
        self.cells.clone()
    }

    /// Iterate over the live cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + Clone + '_ {
        self.cells.iter()
    }

    /// Advance one generation and return the new generation number.
    ///
    /// Total: always succeeds. Once the live set reaches a fixed point,
    /// [`has_mutated`](Self::has_mutated) reports `false` and further steps
    /// leave the set unchanged. The counter saturates at
    /// [`MAX_GENERATION`]; steps past it still update the live set.
    pub fn next_generation(&mut self) -> u64 {
        self.step(false);
        self.generation
    }

    /// Compute the next generation but keep the board untouched if it
    /// would not change.
    ///
    /// When the computed set equals the current one, returns the current
    /// generation without incrementing it or touching the mutation flag.
    /// Otherwise behaves exactly like [`next_generation`](Self::next_generation).
    pub fn next_generation_or_freeze(&mut self) -> u64 {
        self.step(true);
        self.generation
    }

    /// Apply one step and report whether the live set changed.
    pub(crate) fn step(&mut self, freeze_on_non_mutation: bool) -> bool {
        transition::compute_next(&self.cells, &mut self.next_cells);
        let mutated = self.next_cells != self.cells;

        if !mutated && freeze_on_non_mutation {
            return false;
        }

        self.mutated = mutated;
        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation = self.generation.saturating_add(1).min(MAX_GENERATION);
        mutated
    }

    /// Fast-forward the generation counter without computing steps.
    ///
    /// Only valid while the board is provably stable (the last step did
    /// not mutate it); the counter then reflects computed history exactly.
    ///
    /// # Errors
    ///
    /// - [`BoardError::MutatedSinceLastGeneration`] if the last step
    ///   mutated the board.
    /// - [`BoardError::GenerationOutOfRange`] if `generation` is below the
    ///   current generation or above [`MAX_GENERATION`].
    pub(crate) fn force_generation(&mut self, generation: u64) -> Result<(), BoardError> {
        if generation < self.generation || generation > MAX_GENERATION {
            return Err(BoardError::GenerationOutOfRange {
                requested: generation,
                current: self.generation,
            });
        }
        if self.mutated {
            return Err(BoardError::MutatedSinceLastGeneration);
        }
        self.generation = generation;
        Ok(())
    }

    /// Fresh board with the same id, generation and live set, a cleared
    /// mutation flag and its own empty scratch buffer.
    pub(crate) fn working_copy(&self) -> Board {
        Board {
            id: self.id,
            generation: self.generation,
            cells: self.cells.clone(),
            next_cells: BTreeSet::new(),
            mutated: false,
        }
    }
}

impl Clone for Board {
    /// Clones identity, generation, live set and mutation flag. The
    /// scratch buffer is not carried over.
    fn clone(&self) -> Self {
        Board {
            mutated: self.mutated,
            ..self.working_copy()
        }
    }
}

impl PartialEq for Board {
    /// Boards are equal when id, generation and live set match. The
    /// mutation flag is transient step state and is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.generation == other.generation && self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("population", &self.cells.len())
            .field("mutated", &self.mutated)
            .finish()
    }
}
