//! Vita: Conway's Game of Life with a paced simulation controller.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Vita sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use vita::prelude::*;
//!
//! let (observer, frames) = ChannelObserver::pair();
//! let controller = Controller::new(SimConfig::default(), Arc::new(observer)).unwrap();
//!
//! controller.place_pattern(&vita::grid::pattern::BLINKER, 8, 10).unwrap();
//! controller.single_step().unwrap();
//!
//! let frame = frames.recv().unwrap();
//! assert_eq!(frame.to_string(), "Generation: 1");
//! assert_eq!(frame.cells.population(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vita-core` | Generation id, snapshots, notifications, commands, traits |
//! | [`grid`] | `vita-grid` | The cell matrix, Life rule, pattern library |
//! | [`engine`] | `vita-engine` | Controller, configuration, background loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`vita-core`).
pub use vita_core as types;

/// The grid engine (`vita-grid`).
///
/// [`grid::Grid`] holds the matrix and computes successors;
/// [`grid::pattern`] has the classic shapes.
pub use vita_grid as grid;

/// The simulation controller (`vita-engine`).
pub use vita_engine as engine;

/// Common imports for typical Vita usage.
///
/// ```rust
/// use vita::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use vita_core::{
        CellAccess, Command, Generation, Notification, Observer, RunState, Snapshot, StepStats,
        Trigger,
    };

    // Grid
    pub use vita_grid::{Grid, GridError, Pattern, PATTERNS};

    // Engine
    pub use vita_engine::{
        ChannelObserver, ConfigError, ControlError, Controller, ControllerMetrics,
        MaxGenerations, SimConfig,
    };
}
