//! Simulation controller for Vita.
//!
//! Sequences generations over time on top of the [`vita_grid`] engine:
//! owns the generation counter and the run/stop state machine, runs the
//! paced background loop, and reports every completed step, stop and
//! reset to an [`Observer`](vita_core::Observer).
//!
//! # Threads
//!
//! ```text
//! Caller thread(s)            vita-tick                 vita-notify
//!     |                           |                         |
//!     |--start()----------------->| lock world              |
//!     |                           | grid.step(), gen += 1   |
//!     |--toggle_cell()/snapshot() | outbox.send(n) -------->| observer.notify(n)
//!     |   (lock world)            | unlock                  |
//!     |                           | park_timeout(interval)  |
//!     |--stop()------------------>| sees Stopped, exits     |
//!     |   unpark + join           |                         |
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod metrics;
pub mod observer;

mod dispatch;
mod tick_thread;
mod world;

pub use config::{ConfigError, MaxGenerations, SimConfig};
pub use controller::{ControlError, Controller};
pub use metrics::ControllerMetrics;
pub use observer::ChannelObserver;
