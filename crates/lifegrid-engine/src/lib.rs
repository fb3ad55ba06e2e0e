//! Board service orchestrating Lifegrid storage and simulation.
//!
//! [`BoardService`] is the caller-facing API: it creates boards from the
//! matrix presentation, reads them back, advances them by `N`
//! generations and deletes them. Advancing follows the kernel's control
//! flow: load the stored board, run a private copy, then persist through
//! the store's conditional update keyed on the generation observed at
//! load time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use service::{AdvanceRequest, BoardService};
