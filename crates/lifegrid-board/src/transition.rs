//! Single-step B3/S23 transition over a sparse live set.
//!
//! Only cells within one step of a live cell can change, so the walk is
//! driven by the live set alone. No coordinate-to-count table is built:
//! for each live ("outer") cell the visitor walks its 8 neighbours, and on
//! the first visit of each neighbour it immediately walks that neighbour's
//! own 8 neighbours to decide the neighbour's fate. Recursion is fixed at
//! two levels (`nested` being `Some` stops a third), which bounds the work
//! at 8 + 8 * 8 = 72 lookups per live cell.
//!
//! A neighbour shared by several live cells is re-evaluated once per
//! occurrence. Every evaluation is deterministic and the output set stores
//! coordinates only, so repeated inserts are idempotent.

use std::collections::BTreeSet;

use lifegrid_core::{Cell, Coordinate, Liveness, NeighborhoodVisitor};

/// Per-step counting state threaded by `&mut` through the neighbourhood walk.
struct Transition<'a> {
    cells: &'a BTreeSet<Cell>,
    next: &'a mut BTreeSet<Cell>,
    /// Live neighbours of the outer cell.
    alive_neighbors: u8,
    /// Live neighbours of the neighbour currently being evaluated.
    nested_alive_neighbors: Option<u8>,
}

impl Transition<'_> {
    #[inline]
    fn liveness(&self, at: Coordinate) -> Liveness {
        Liveness::from(self.cells.contains(&at))
    }

    #[inline]
    fn settle(&mut self, at: Coordinate, current: Liveness, alive_neighbors: u8) {
        if current.next(alive_neighbors).is_alive() {
            self.next.insert(Cell::at(at, Liveness::Alive));
        }
    }

    fn reset(&mut self) {
        self.alive_neighbors = 0;
    }
}

impl NeighborhoodVisitor for Transition<'_> {
    fn visit(&mut self, neighbor: Coordinate) {
        let current = self.liveness(neighbor);

        match self.nested_alive_neighbors.as_mut() {
            Some(nested) => {
                *nested += u8::from(current.is_alive());
                return;
            }
            None => self.alive_neighbors += u8::from(current.is_alive()),
        }

        self.nested_alive_neighbors = Some(0);
        neighbor.visit_neighborhood(self);
        let count = self.nested_alive_neighbors.take().unwrap_or_default();
        self.settle(neighbor, current, count);
    }

    fn done(&mut self, origin: Coordinate) {
        // End of a nested walk: the caller in `visit` settles the neighbour.
        if self.nested_alive_neighbors.is_some() {
            return;
        }
        let current = self.liveness(origin);
        self.settle(origin, current, self.alive_neighbors);
    }
}

/// Compute the generation after `cells` into `next`.
///
/// `next` is cleared first and keeps its previous allocation.
pub(crate) fn compute_next(cells: &BTreeSet<Cell>, next: &mut BTreeSet<Cell>) {
    next.clear();
    let mut visitor = Transition {
        cells,
        next,
        alive_neighbors: 0,
        nested_alive_neighbors: None,
    };
    for cell in cells {
        cell.coordinate().visit_neighborhood(&mut visitor);
        visitor.reset();
    }
}
