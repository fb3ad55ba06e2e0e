//! Board persistence for Lifegrid.
//!
//! The [`BoardStore`] trait is the boundary between the kernel and any
//! storage engine. Its [`update`](BoardStore::update) is a compare-and-replace
//! keyed on `(id, original_generation)`: two callers that load the same
//! board, advance private copies and race to save cannot silently clobber
//! each other. The loser sees `Ok(false)` and must surface a conflict.
//!
//! [`InMemoryBoardStore`] is the reference implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryBoardStore;
pub use record::BoardRecord;
pub use store::BoardStore;
