//! Test utilities for Vita development.
//!
//! Provides a [`RecordingObserver`] that keeps every notification and
//! lets a test block until a condition holds, a polling
//! [`wait_until`] helper, and grid [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use vita_core::{Notification, Observer, Trigger};

/// Observer that records every notification it receives.
///
/// Waiters are woken on each arrival, so timing-sensitive tests can
/// block on a predicate instead of sleeping for a fixed time.
#[derive(Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<Notification>>,
    arrived: Condvar,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far, in arrival order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.guard().clone()
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Number of notifications with the given trigger.
    pub fn count(&self, trigger: Trigger) -> usize {
        self.guard().iter().filter(|n| n.trigger == trigger).count()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.guard().last().cloned()
    }

    /// Forget everything received so far.
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// Block until `predicate` holds over the received notifications or
    /// `timeout` elapses. Returns whether the predicate held.
    pub fn wait_for(&self, timeout: Duration, predicate: impl Fn(&[Notification]) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        let mut seen = self.guard();
        loop {
            if predicate(&seen) {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            seen = match self.arrived.wait_timeout(seen, deadline - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }

    /// Block until a notification with `trigger` has arrived.
    pub fn wait_for_trigger(&self, trigger: Trigger, timeout: Duration) -> bool {
        self.wait_for(timeout, |seen| seen.iter().any(|n| n.trigger == trigger))
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Observer for RecordingObserver {
    fn notify(&self, notification: &Notification) {
        self.guard().push(notification.clone());
        self.arrived.notify_all();
    }
}

/// Poll `condition` every `poll` until it holds or `timeout` elapses.
/// Returns whether it held.
pub fn wait_until(timeout: Duration, poll: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(poll);
    }
}
