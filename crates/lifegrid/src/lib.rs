//! Lifegrid: sparse, versioned Conway's Game of Life boards.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Lifegrid sub-crates. For most users, adding `lifegrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let service = BoardService::new(InMemoryBoardStore::new(), ServiceConfig::default()).unwrap();
//!
//! // A vertical blinker: rows map to x, columns to y.
//! let id = service.create(&BoardState::new(0, [".1.", ".1.", ".1."])).unwrap();
//!
//! let view = service.advance(&id, AdvanceRequest::new(1)).unwrap();
//! assert_eq!(view.generation, 1);
//! assert_eq!(view.cells, [".....", ".111.", "....."]);
//!
//! // A blinker never settles, so a final-state request is refused and
//! // nothing is persisted.
//! let err = service
//!     .advance(&id, AdvanceRequest::new(10).expect_final_state())
//!     .unwrap_err();
//! assert!(err.is_precondition_failed());
//! assert_eq!(service.get(&id).unwrap().generation, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | Coordinates, cells, ids, kernel errors |
//! | [`board`] | `lifegrid-board` | The board kernel and batch runner |
//! | [`store`] | `lifegrid-store` | Store trait, persisted record, in-memory store |
//! | [`view`] | `lifegrid-view` | Matrix parsing and rendering |
//! | [`engine`] | `lifegrid-engine` | The board service and its configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, cells, identifiers and kernel errors (`lifegrid-core`).
pub use lifegrid_core as types;

/// The board kernel (`lifegrid-board`).
///
/// [`board::Board`] owns the live-cell set and generation counter;
/// [`board::Board::run_generations`] advances a copy by `N` steps.
pub use lifegrid_board as board;

/// Persistence boundary (`lifegrid-store`).
///
/// Implement [`store::BoardStore`] for a real backend, or use
/// [`store::InMemoryBoardStore`].
pub use lifegrid_store as store;

/// Matrix presentation (`lifegrid-view`).
pub use lifegrid_view as view;

/// The board service (`lifegrid-engine`).
pub use lifegrid_engine as engine;

/// Common imports for typical Lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lifegrid_core::{BoardId, Cell, Coordinate, Liveness, MAX_GENERATION};

    // Errors
    pub use lifegrid_core::BoardError;
    pub use lifegrid_engine::{ConfigError, ServiceError};
    pub use lifegrid_store::StoreError;
    pub use lifegrid_view::ViewError;

    // Kernel
    pub use lifegrid_board::{Board, RunOutcome};

    // Store
    pub use lifegrid_store::{BoardStore, InMemoryBoardStore};

    // Presentation
    pub use lifegrid_view::{BoardState, BoardView, MatrixFormat};

    // Service
    pub use lifegrid_engine::{AdvanceRequest, BoardService, ServiceConfig};
}
