//! Matrix presentation of Lifegrid boards.
//!
//! Boards travel outside the kernel as a rectangular list of rows, one
//! character per cell: row index maps to the first coordinate axis
//! (`x`), column index to the second (`y`), and `(row 0, column 0)` is
//! the origin. [`MatrixFormat`] converts between rows and live-cell sets;
//! [`BoardState`] and [`BoardView`] are the input and output models built
//! on top of it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod state;

pub use error::ViewError;
pub use matrix::MatrixFormat;
pub use state::{BoardState, BoardView};
