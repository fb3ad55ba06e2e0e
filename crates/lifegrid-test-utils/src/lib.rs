//! Test utilities for Lifegrid development.
//!
//! Provides the reference [`patterns`] used across the workspace tests and
//! benchmarks, plus seeded random soups for property and stress testing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use std::collections::BTreeSet;

use lifegrid_core::{Cell, Coordinate};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub use patterns::Pattern;

/// Deterministic random soup: each cell of a `rows x cols` rectangle at the
/// origin is alive with probability `density`.
///
/// The same `seed` always yields the same set.
pub fn random_soup(seed: u64, rows: i64, cols: i64, density: f64) -> BTreeSet<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = BTreeSet::new();
    for x in 0..rows {
        for y in 0..cols {
            if rng.gen::<f64>() < density {
                cells.insert(Cell::alive(x, y));
            }
        }
    }
    cells
}

/// Translate every cell by `(dx, dy)`.
pub fn translate(cells: &BTreeSet<Cell>, dx: i64, dy: i64) -> BTreeSet<Cell> {
    cells
        .iter()
        .map(|c| Cell::at(c.coordinate().offset(dx, dy), c.state()))
        .collect()
}

/// Collect `(x, y)` pairs into a live-cell set.
pub fn cells_of(coords: &[(i64, i64)]) -> BTreeSet<Cell> {
    coords
        .iter()
        .map(|&c| Cell::from(Coordinate::from(c)))
        .collect()
}
