//! Reference Life patterns with known behaviour.
//!
//! - Oscillators (period 2): [`Pattern::Blinker`], [`Pattern::Toad`],
//!   [`Pattern::Beacon`]
//! - Still lifes: [`Pattern::Block`], [`Pattern::Tub`]
//! - Spaceship (period 4): [`Pattern::Glider`]

use std::collections::BTreeSet;

use lifegrid_core::Cell;

use crate::cells_of;

/// A named pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Blinker,
    Toad,
    Beacon,
    Block,
    Tub,
    Glider,
}

impl Pattern {
    pub const OSCILLATORS: [Pattern; 3] = [Pattern::Blinker, Pattern::Toad, Pattern::Beacon];
    pub const STILL_LIFES: [Pattern; 2] = [Pattern::Block, Pattern::Tub];

    /// Cells of the pattern's initial phase.
    pub fn cells(self) -> BTreeSet<Cell> {
        match self {
            Pattern::Blinker => cells_of(&[(-1, 0), (0, 0), (1, 0)]),
            Pattern::Toad => cells_of(&[(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)]),
            Pattern::Beacon => cells_of(&[
                (-1, -1),
                (0, -1),
                (-1, 0),
                (0, 0),
                (1, 1),
                (2, 1),
                (1, 2),
                (2, 2),
            ]),
            Pattern::Block => cells_of(&[(0, 0), (0, 1), (1, 0), (1, 1)]),
            Pattern::Tub => cells_of(&[(0, 1), (1, 0), (0, -1), (-1, 0)]),
            Pattern::Glider => cells_of(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 2)]),
        }
    }

    /// Cells after one generation, for the patterns whose next phase is
    /// listed (oscillators and still lifes).
    pub fn next_phase(self) -> Option<BTreeSet<Cell>> {
        match self {
            Pattern::Blinker => Some(cells_of(&[(0, -1), (0, 0), (0, 1)])),
            Pattern::Toad => Some(cells_of(&[
                (1, -1),
                (-1, 0),
                (2, 0),
                (-1, 1),
                (2, 1),
                (0, 2),
            ])),
            Pattern::Beacon => Some(cells_of(&[
                (-1, -1),
                (0, -1),
                (-1, 0),
                (2, 1),
                (1, 2),
                (2, 2),
            ])),
            Pattern::Block | Pattern::Tub => Some(self.cells()),
            Pattern::Glider => None,
        }
    }

    /// `true` if the pattern never changes.
    pub fn is_still_life(self) -> bool {
        Self::STILL_LIFES.contains(&self)
    }
}
