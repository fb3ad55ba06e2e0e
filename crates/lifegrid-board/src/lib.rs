//! The Lifegrid simulation kernel.
//!
//! A [`Board`] owns one instance's generation counter and its sparse
//! set of live cells. [`Board::next_generation`] applies one B3/S23 step;
//! [`Board::run_generations`] drives a private working copy through many
//! steps, skips the remainder once the population is stable, and enforces
//! the optional "must land on a fixed point" contract.
//!
//! The kernel is synchronous and performs no I/O. Nothing is shared
//! between boards, so any number of independent copies may be stepped
//! concurrently without locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod run;
mod transition;

pub use board::Board;
pub use run::RunOutcome;
