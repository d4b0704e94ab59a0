//! Core types and traits for the Vita Life simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid engine, the simulation controller
//! and whatever presentation layer sits on top: generation ids, the
//! immutable [`Snapshot`] cell matrix, observer notifications and the
//! command inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod notification;
pub mod snapshot;
pub mod traits;

pub use command::{Command, RunState};
pub use error::SnapshotError;
pub use id::Generation;
pub use notification::{Notification, StepStats, Trigger};
pub use snapshot::Snapshot;
pub use traits::{CellAccess, Observer};
