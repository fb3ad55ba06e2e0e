//! Benchmark profiles for the Lifegrid board kernel.
//!
//! - [`soup_profile`]: seeded random square, the churn-heavy case
//! - [`glider_fleet`]: a diagonal row of gliders that never settles
//! - [`block_field`]: a grid of blocks, stable from the first step

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeSet;

use lifegrid_board::Board;
use lifegrid_core::{BoardError, BoardId, Cell};
use lifegrid_test_utils::{random_soup, translate, Pattern};

/// A `side x side` soup at 35% density.
pub fn soup_profile(seed: u64, side: i64) -> Result<Board, BoardError> {
    Board::new(BoardId::new(), 0, random_soup(seed, side, side, 0.35))
}

/// `count` gliders placed `spacing` cells apart along the diagonal.
///
/// All gliders travel the same way, so they never collide.
pub fn glider_fleet(count: i64, spacing: i64) -> Result<Board, BoardError> {
    let glider = Pattern::Glider.cells();
    let cells: BTreeSet<Cell> = (0..count)
        .flat_map(|i| translate(&glider, i * spacing, -i * spacing))
        .collect();
    Board::new(BoardId::new(), 0, cells)
}

/// `n x n` blocks on a 4-cell pitch.
pub fn block_field(n: i64) -> Result<Board, BoardError> {
    let block = Pattern::Block.cells();
    let cells: BTreeSet<Cell> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .flat_map(|(i, j)| translate(&block, i * 4, j * 4))
        .collect();
    Board::new(BoardId::new(), 0, cells)
}
