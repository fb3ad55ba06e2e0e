//! Grid coordinates and the 8-neighbourhood walk.

use smallvec::SmallVec;
use std::fmt;

/// All 8 offsets in enumeration order: NW, N, NE, W, E, SW, S, SE
/// (x-major, matching the lexicographic cell ordering).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the unbounded 2D grid.
///
/// Ordering is lexicographic: `x` first, then `y`. No bounds are enforced;
/// neighbour arithmetic wraps at the numeric edge of `i64` instead of
/// overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// First axis (the row index in the matrix presentation).
    pub x: i64,
    /// Second axis (the column index in the matrix presentation).
    pub y: i64,
}

impl Coordinate {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Create a coordinate from its two axes.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Stream the 8 neighbours of this coordinate into `visitor`, then
    /// signal [`NeighborhoodVisitor::done`] with `self`.
    ///
    /// The walk is a fixed sequence over [`NEIGHBOR_OFFSETS`]:
    /// no allocation and no dynamic dispatch. The visitor may re-enter this
    /// method for a neighbour from inside [`NeighborhoodVisitor::visit`].
    #[inline]
    pub fn visit_neighborhood<V>(self, visitor: &mut V)
    where
        V: NeighborhoodVisitor + ?Sized,
    {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            visitor.visit(self.offset(dx, dy));
        }
        visitor.done(self);
    }

    /// The 8 neighbours of this coordinate, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(self) -> SmallVec<[Coordinate; 8]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Receives the neighbours of a coordinate one at a time.
///
/// [`Coordinate::visit_neighborhood`] calls [`visit`](Self::visit) exactly
/// 8 times and then [`done`](Self::done) once with the coordinate whose
/// neighbourhood was walked. Keeping the stream and the completion signal
/// separate lets one walk routine serve both counting a cell's neighbours
/// and counting a neighbour's own neighbours.
pub trait NeighborhoodVisitor {
    /// Called for each neighbour coordinate.
    fn visit(&mut self, neighbor: Coordinate);

    /// Called once after all 8 neighbours of `origin` were visited.
    fn done(&mut self, origin: Coordinate);
}
