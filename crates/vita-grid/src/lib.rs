//! Grid engine for Vita.
//!
//! Owns the `width × height` cell matrix and computes successor
//! generations under the classic B3/S23 Life rule. Cells outside the
//! matrix count as permanently dead; there is no wraparound.
//!
//! # Modules
//!
//! - [`grid`]: the double-buffered [`Grid`] and its edit operations
//! - [`neighbourhood`]: Moore (8-connected) neighbour lookup
//! - [`rule`]: the birth/survival rule
//! - [`pattern`]: a small library of classic patterns

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod neighbourhood;
pub mod pattern;
pub mod rule;

pub use error::GridError;
pub use grid::Grid;
pub use pattern::{Pattern, PATTERNS};
pub use vita_core::{CellAccess, Snapshot, StepStats};
