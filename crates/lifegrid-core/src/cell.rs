//! Cells and their liveness payload.
//!
//! A [`Cell`] is a [`Coordinate`] plus a [`Liveness`] payload. Equality,
//! ordering and hashing look at the coordinate **only**; the payload is
//! inert metadata. This lets a board keep its population in a plain
//! `BTreeSet<Cell>` without a separate key type, and lets the set be probed
//! by coordinate (see the [`Borrow`] impl).
//!
//! The flip side: inserting a cell at an occupied coordinate with a
//! different payload is a no-op for set membership, not an update. To
//! change a stored cell's payload, remove it and insert the new one.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::coord::Coordinate;

/// Liveness of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Liveness {
    /// The cell is empty.
    #[default]
    Dead = 0,
    /// The cell is populated.
    Alive = 1,
}

impl Liveness {
    /// `true` for [`Liveness::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Liveness::Alive
    }

    /// Apply the B3/S23 rule: the liveness of a cell in the next
    /// generation given its current liveness and live-neighbour count.
    #[inline]
    pub fn next(self, alive_neighbors: u8) -> Liveness {
        match (self, alive_neighbors) {
            (Liveness::Alive, 2 | 3) | (Liveness::Dead, 3) => Liveness::Alive,
            _ => Liveness::Dead,
        }
    }
}

impl From<bool> for Liveness {
    fn from(alive: bool) -> Self {
        if alive {
            Liveness::Alive
        } else {
            Liveness::Dead
        }
    }
}

/// A coordinate carrying a liveness payload.
///
/// `Cell` compares, orders and hashes exactly like its [`Coordinate`].
#[derive(Clone, Copy, Default)]
pub struct Cell {
    coord: Coordinate,
    state: Liveness,
}

impl Cell {
    /// Create a cell at `(x, y)` with the given payload.
    pub const fn new(x: i64, y: i64, state: Liveness) -> Self {
        Self {
            coord: Coordinate::new(x, y),
            state,
        }
    }

    /// Create a live cell at `(x, y)`.
    pub const fn alive(x: i64, y: i64) -> Self {
        Self::new(x, y, Liveness::Alive)
    }

    /// Create a cell at `coord` with the given payload.
    pub const fn at(coord: Coordinate, state: Liveness) -> Self {
        Self { coord, state }
    }

    /// First axis.
    #[inline]
    pub fn x(&self) -> i64 {
        self.coord.x
    }

    /// Second axis.
    #[inline]
    pub fn y(&self) -> i64 {
        self.coord.y
    }

    /// Position of this cell.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    /// Payload of this cell.
    #[inline]
    pub fn state(&self) -> Liveness {
        self.state
    }

    /// `true` if the payload is [`Liveness::Alive`].
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match `Coordinate`'s hash for the `Borrow` impl below.
        self.coord.hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord.cmp(&other.coord)
    }
}

impl Borrow<Coordinate> for Cell {
    fn borrow(&self) -> &Coordinate {
        &self.coord
    }
}

impl From<Coordinate> for Cell {
    /// A coordinate on its own denotes a live cell.
    fn from(coord: Coordinate) -> Self {
        Self::at(coord, Liveness::Alive)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:?})", self.coord.x, self.coord.y, self.state)
    }
}
