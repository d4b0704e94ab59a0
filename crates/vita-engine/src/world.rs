//! State shared between the caller threads and the tick thread.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crossbeam_channel::Sender;
use vita_core::{CellAccess, Generation, Notification, RunState, Snapshot, StepStats, Trigger};
use vita_grid::Grid;

use crate::metrics::ControllerMetrics;

/// Everything a controller operation reads or writes, behind one lock.
pub(crate) struct World {
    pub grid: Grid,
    pub generation: Generation,
    pub state: RunState,
    pub metrics: ControllerMetrics,
    /// When the continuous loop last stepped. Survives stop/start so a
    /// restarted loop keeps the pace.
    pub last_tick: Option<Instant>,
    /// `None` once the controller is shutting down.
    outbox: Option<Sender<Notification>>,
}

impl World {
    pub fn new(grid: Grid, outbox: Sender<Notification>) -> Self {
        Self {
            grid,
            generation: Generation::ZERO,
            state: RunState::Stopped,
            metrics: ControllerMetrics::default(),
            last_tick: None,
            outbox: Some(outbox),
        }
    }

    /// Step the grid once and bump the generation counter.
    pub fn advance(&mut self) -> Snapshot {
        let start = Instant::now();
        let cells = self.grid.step();
        self.metrics.last_step_us = start.elapsed().as_micros() as u64;
        self.generation = self.generation.next();
        cells
    }

    /// Queue a notification describing the current world.
    ///
    /// Must be called with the world lock held so that notifications
    /// leave in the order their state changes happened.
    pub fn publish(&self, trigger: Trigger, cells: Snapshot) {
        let stats = if trigger.is_step() {
            self.grid.last_step()
        } else {
            StepStats {
                population: self.grid.population(),
                ..StepStats::default()
            }
        };
        let notification = Notification {
            generation: self.generation,
            running: self.state.is_running(),
            cells,
            trigger,
            stats,
        };
        let Some(outbox) = &self.outbox else {
            return;
        };
        if outbox.send(notification).is_err() {
            tracing::warn!(
                generation = %self.generation,
                ?trigger,
                "notification dropped, dispatcher is gone"
            );
        }
    }

    /// Publish the current matrix without stepping.
    pub fn notify_current(&self, trigger: Trigger) {
        self.publish(trigger, self.grid.snapshot());
    }

    /// Drop the sender so the dispatcher drains and exits.
    pub fn close_outbox(&mut self) {
        self.outbox = None;
    }
}

/// Lock the world, recovering the guard if a previous holder panicked.
///
/// Every mutation leaves the world consistent before it can panic
/// (the grid swap is the last step), so a poisoned lock is still usable.
pub(crate) fn lock(world: &Mutex<World>) -> MutexGuard<'_, World> {
    world.lock().unwrap_or_else(PoisonError::into_inner)
}
