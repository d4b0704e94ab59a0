//! The paced continuous-advancement loop.
//!
//! [`TickLoop`] runs on the `vita-tick` thread for as long as the world
//! stays [`RunState::Running`]. Each tick locks the world, steps once,
//! publishes, and unlocks; the wait between ticks happens with the lock
//! released.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use vita_core::{RunState, Trigger};

use crate::config::MaxGenerations;
use crate::world::{self, World};

/// Whether the loop should keep going after a tick.
#[derive(Debug, PartialEq, Eq)]
enum TickOutcome {
    Continue,
    Finished,
}

/// State owned by the tick thread.
pub(crate) struct TickLoop {
    world: Arc<Mutex<World>>,
    interval: Duration,
    max_generations: MaxGenerations,
}

impl TickLoop {
    pub fn new(
        world: Arc<Mutex<World>>,
        interval: Duration,
        max_generations: MaxGenerations,
    ) -> Self {
        Self {
            world,
            interval,
            max_generations,
        }
    }

    /// Main loop. Returns once the world leaves the running state.
    ///
    /// Steps are at least one interval apart, including across a
    /// stop/start cycle: the first tick after a restart waits out the
    /// remainder of the previous interval.
    pub fn run(self) {
        let last_tick = world::lock(&self.world).last_tick;
        let first = match last_tick {
            Some(t) => self.deadline_after(t),
            None => Some(Instant::now()),
        };
        if !self.wait_until(first) {
            tracing::debug!("tick loop exited before first tick");
            return;
        }
        loop {
            let tick_start = Instant::now();
            if self.tick() == TickOutcome::Finished {
                break;
            }
            if !self.wait_until(self.deadline_after(tick_start)) {
                break;
            }
        }
        tracing::debug!("tick loop exited");
    }

    /// One locked iteration: honour the limit, step, publish.
    fn tick(&self) -> TickOutcome {
        let mut world = world::lock(&self.world);
        if !world.state.is_running() {
            return TickOutcome::Finished;
        }

        // Started with the limit already met: stop without stepping.
        if self.max_generations.is_reached(world.generation) {
            world.state = RunState::Stopped;
            world.metrics.auto_stops += 1;
            world.notify_current(Trigger::Stopped);
            tracing::info!(
                generation = %world.generation,
                limit = %self.max_generations,
                "generation limit already reached, stopping"
            );
            return TickOutcome::Finished;
        }

        let cells = world.advance();
        world.last_tick = Some(Instant::now());
        world.metrics.ticks += 1;
        if Duration::from_micros(world.metrics.last_step_us) > self.interval {
            world.metrics.overruns += 1;
            tracing::warn!(
                generation = %world.generation,
                step_us = world.metrics.last_step_us,
                interval_ms = self.interval.as_millis() as u64,
                "step overran the tick interval"
            );
        }

        let finished = self.max_generations.is_reached(world.generation);
        if finished {
            world.state = RunState::Stopped;
            world.metrics.auto_stops += 1;
        }
        let stats = world.grid.last_step();
        tracing::debug!(
            generation = %world.generation,
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            step_us = world.metrics.last_step_us,
            "tick"
        );
        world.publish(Trigger::Tick, cells);

        if finished {
            tracing::info!(
                generation = %world.generation,
                "generation limit reached, loop stopped"
            );
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }

    /// One interval after `from`, or `None` if that instant is not
    /// representable on this platform's clock.
    fn deadline_after(&self, from: Instant) -> Option<Instant> {
        from.checked_add(self.interval)
    }

    /// Park until `deadline`, or until unparked when there is none.
    /// Returns `false` as soon as the world is no longer running.
    ///
    /// `stop()` unparks the thread after flipping the state, so the
    /// running check after every wake-up sees the request promptly.
    fn wait_until(&self, deadline: Option<Instant>) -> bool {
        loop {
            if !world::lock(&self.world).state.is_running() {
                return false;
            }
            let Some(deadline) = deadline else {
                thread::park();
                continue;
            };
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::park_timeout(deadline - now);
        }
    }
}
