//! Conversion between rows of characters and live-cell sets.

use std::collections::BTreeSet;

use lifegrid_core::Cell;

use crate::error::ViewError;

/// Marker characters of the matrix presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixFormat {
    /// Marker for a live cell. Default `'1'`.
    pub alive: char,
    /// Marker for a dead or empty cell. Default `'.'`.
    pub dead: char,
}

impl Default for MatrixFormat {
    fn default() -> Self {
        Self {
            alive: '1',
            dead: '.',
        }
    }
}

impl MatrixFormat {
    /// Parse rows into a live-cell set.
    ///
    /// Rows may differ in length; missing trailing cells are dead.
    /// Fails on the first character that is neither marker.
    pub fn parse<I, S>(&self, rows: I) -> Result<BTreeSet<Cell>, ViewError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = BTreeSet::new();
        for (x, row) in (0i64..).zip(rows) {
            for (y, ch) in (0i64..).zip(row.as_ref().chars()) {
                if ch == self.alive {
                    cells.insert(Cell::alive(x, y));
                } else if ch != self.dead {
                    return Err(ViewError::InvalidCharacter {
                        character: ch,
                        row: x,
                        column: y,
                    });
                }
            }
        }
        Ok(cells)
    }

    /// Render a live-cell set as rows covering its bounding box plus one
    /// dead row/column of margin on every side.
    ///
    /// An empty set renders as no rows. Output size is proportional to the
    /// bounding-box area, not to the population.
    pub fn render<'a, I>(&self, cells: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Cell>,
        I::IntoIter: Clone,
    {
        let cells = cells.into_iter();
        let Some((min_x, max_x, min_y, max_y)) = bounds(cells.clone()) else {
            return Vec::new();
        };

        let live: BTreeSet<Cell> = cells.copied().collect();
        let (lo_x, hi_x) = (min_x.saturating_sub(1), max_x.saturating_add(1));
        let (lo_y, hi_y) = (min_y.saturating_sub(1), max_y.saturating_add(1));

        (lo_x..=hi_x)
            .map(|x| {
                (lo_y..=hi_y)
                    .map(|y| {
                        if live.contains(&Cell::alive(x, y)) {
                            self.alive
                        } else {
                            self.dead
                        }
                    })
                    .collect::<String>()
            })
            .collect()
    }
}

fn bounds<'a>(cells: impl Iterator<Item = &'a Cell>) -> Option<(i64, i64, i64, i64)> {
    cells.fold(None, |acc, c| {
        let (x, y) = (c.x(), c.y());
        Some(match acc {
            None => (x, x, y, y),
            Some((lx, hx, ly, hy)) => (lx.min(x), hx.max(x), ly.min(y), hy.max(y)),
        })
    })
}
