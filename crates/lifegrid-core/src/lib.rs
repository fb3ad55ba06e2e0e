//! Core types for the Lifegrid simulation kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the primitives shared by every other Lifegrid crate: integer
//! [`Coordinate`]s on an unbounded grid, [`Cell`]s whose identity is
//! coordinate-only, the [`NeighborhoodVisitor`] walk, opaque [`BoardId`]
//! identifiers and the kernel's [`BoardError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod id;

pub use cell::{Cell, Liveness};
pub use coord::{Coordinate, NeighborhoodVisitor, NEIGHBOR_OFFSETS};
pub use error::BoardError;
pub use id::BoardId;

/// Highest generation a board may carry.
///
/// Persisted generations are signed 64-bit values, so the counter is
/// capped at `i64::MAX` even though it is held as a `u64`.
pub const MAX_GENERATION: u64 = i64::MAX as u64;
