//! The user-facing simulation controller.
//!
//! [`Controller`] owns the world, the `vita-tick` loop thread and the
//! `vita-notify` dispatcher thread. Every operation takes `&self`, so a
//! controller can be shared behind an `Arc` between a presentation layer
//! and its observer.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use vita_core::{Command, Generation, Observer, RunState, Snapshot, Trigger};
use vita_grid::{Grid, GridError, Pattern};

use crate::config::{ConfigError, SimConfig};
use crate::dispatch;
use crate::metrics::ControllerMetrics;
use crate::tick_thread::TickLoop;
use crate::world::{self, World};

// ── ControlError ───────────────────────────────────────────────────

/// Errors returned by controller commands.
///
/// None of them change the world.
#[derive(Debug, PartialEq)]
pub enum ControlError {
    /// The grid rejected an edit (out-of-bounds cell, pattern that does
    /// not fit, mismatched snapshot, bad density).
    Grid(GridError),
    /// A manual step was requested while the continuous loop is active.
    InvalidWhileRunning,
    /// The tick thread could not be spawned; the controller stays
    /// stopped.
    ThreadSpawnFailed {
        /// The OS error.
        reason: String,
    },
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::InvalidWhileRunning => {
                write!(f, "cannot step manually while the simulation is running")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ControlError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Controller ─────────────────────────────────────────────────────

/// Sequences generations over time and exposes run control.
///
/// Starts [`Stopped`](RunState::Stopped) at generation 0 with every cell
/// dead. Dropping the controller stops the loop and joins both
/// background threads after the observer has received every pending
/// notification.
pub struct Controller {
    config: SimConfig,
    world: Arc<Mutex<World>>,
    /// Serialises `start`, `stop` and `reset`.
    tick_thread: Mutex<Option<JoinHandle<()>>>,
    dispatch_thread: Option<JoinHandle<()>>,
}

impl Controller {
    /// Validate `config`, build the grid and spawn the dispatcher that
    /// feeds `observer`.
    ///
    /// Fails before any thread is spawned if the configuration is
    /// invalid.
    pub fn new(config: SimConfig, observer: Arc<dyn Observer>) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;

        let (tx, rx) = crossbeam_channel::unbounded();
        let dispatch_thread = thread::Builder::new()
            .name("vita-notify".into())
            .spawn(move || dispatch::run(rx, observer))
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("vita-notify: {e}"),
            })?;

        tracing::info!(
            width = config.width,
            height = config.height,
            max_generations = %config.max_generations,
            tick_interval_ms = config.tick_interval.as_millis() as u64,
            "controller created"
        );

        Ok(Self {
            world: Arc::new(Mutex::new(World::new(grid, tx))),
            tick_thread: Mutex::new(None),
            dispatch_thread: Some(dispatch_thread),
            config,
        })
    }

    /// `Stopped → Running`: spawn the continuous loop.
    ///
    /// Returns `Ok(false)` without side effects if the loop is already
    /// running. Concurrent callers serialise, so at most one loop exists.
    pub fn start(&self) -> Result<bool, ControlError> {
        let mut tick_thread = self.control();
        if self.is_running() {
            return Ok(false);
        }
        // A loop that stopped at the generation limit may still be
        // winding down.
        if let Some(handle) = tick_thread.take() {
            join_tick_thread(handle);
        }

        {
            let mut world = self.lock();
            world.state = RunState::Running;
            world.metrics.starts += 1;
        }

        let tick_loop = TickLoop::new(
            Arc::clone(&self.world),
            self.config.tick_interval,
            self.config.max_generations,
        );
        let spawned = thread::Builder::new()
            .name("vita-tick".into())
            .spawn(move || tick_loop.run());
        match spawned {
            Ok(handle) => {
                *tick_thread = Some(handle);
                tracing::info!(generation = %self.generation(), "simulation started");
                Ok(true)
            }
            Err(e) => {
                let mut world = self.lock();
                world.state = RunState::Stopped;
                world.metrics.starts -= 1;
                tracing::warn!(error = %e, "tick thread spawn failed");
                Err(ControlError::ThreadSpawnFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// `Running → Stopped`. Returns `false` if the loop was not running.
    ///
    /// When this returns, the loop thread has exited: no further step
    /// runs. A step already in progress completes first.
    pub fn stop(&self) -> bool {
        let mut tick_thread = self.control();
        let stopped = {
            let mut world = self.lock();
            if world.state.is_running() {
                world.state = RunState::Stopped;
                world.metrics.stops += 1;
                world.notify_current(Trigger::Stopped);
                tracing::info!(generation = %world.generation, "simulation stopped");
                true
            } else {
                false
            }
        };
        if let Some(handle) = tick_thread.take() {
            handle.thread().unpark();
            join_tick_thread(handle);
        }
        stopped
    }

    /// Stop the loop if it runs, then clear every cell and zero the
    /// generation counter. Valid in any state.
    pub fn reset(&self) {
        let mut tick_thread = self.control();
        let was_running = {
            let mut world = self.lock();
            let was_running = world.state.is_running();
            if was_running {
                world.state = RunState::Stopped;
                world.metrics.stops += 1;
            }
            was_running
        };
        if let Some(handle) = tick_thread.take() {
            handle.thread().unpark();
            join_tick_thread(handle);
        }

        let mut world = self.lock();
        world.grid.clear();
        world.generation = Generation::ZERO;
        world.metrics.resets += 1;
        world.notify_current(Trigger::Reset);
        tracing::info!(was_running, "simulation reset");
    }

    /// Advance exactly one generation. Only valid while stopped.
    ///
    /// Not bounded by the generation limit.
    pub fn single_step(&self) -> Result<Generation, ControlError> {
        let mut world = self.lock();
        if world.state.is_running() {
            return Err(ControlError::InvalidWhileRunning);
        }
        let cells = world.advance();
        world.metrics.single_steps += 1;
        tracing::debug!(generation = %world.generation, "single step");
        world.publish(Trigger::SingleStep, cells);
        Ok(world.generation)
    }

    /// Flip the cell at `(x, y)` and return its new state. Allowed in
    /// any state; the generation counter is untouched.
    pub fn toggle_cell(&self, x: i32, y: i32) -> Result<bool, ControlError> {
        Ok(self.lock().grid.toggle(x, y)?)
    }

    /// Stamp a pattern with its top-left corner at `(x, y)`.
    pub fn place_pattern(&self, pattern: &Pattern, x: i32, y: i32) -> Result<(), ControlError> {
        Ok(self.lock().grid.stamp(pattern, x, y)?)
    }

    /// Overwrite the grid with a seeded random fill.
    pub fn randomize(&self, seed: u64, density: f64) -> Result<(), ControlError> {
        Ok(self.lock().grid.randomize(seed, density)?)
    }

    /// Replace the grid contents with `snapshot`.
    pub fn load(&self, snapshot: &Snapshot) -> Result<(), ControlError> {
        Ok(self.lock().grid.load(snapshot)?)
    }

    /// Route one presentation-layer command.
    pub fn apply(&self, command: Command) -> Result<(), ControlError> {
        match command {
            Command::ToggleCell { x, y } => self.toggle_cell(x, y).map(drop),
            Command::Start => self.start().map(drop),
            Command::Stop => {
                self.stop();
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::SingleStep => self.single_step().map(drop),
        }
    }

    /// A consistent copy of the current matrix.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().grid.snapshot()
    }

    /// Generations completed since creation or the last reset.
    pub fn generation(&self) -> Generation {
        self.lock().generation
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.lock().state
    }

    /// `true` while the continuous loop is active.
    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Lifetime counters.
    pub fn metrics(&self) -> ControllerMetrics {
        self.lock().metrics
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, World> {
        world::lock(&self.world)
    }

    fn control(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.tick_thread
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let world = self.lock();
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("generation", &world.generation)
            .field("state", &world.state)
            .finish_non_exhaustive()
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop();
        self.lock().close_outbox();

        if let Some(handle) = self.dispatch_thread.take() {
            // An observer holding the last reference drops us on the
            // dispatcher itself; it exits once this frame returns.
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                tracing::error!("notification dispatcher panicked");
            }
        }
    }
}

fn join_tick_thread(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        tracing::error!("tick thread panicked");
    }
}
