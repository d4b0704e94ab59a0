//! Observer notifications emitted by the simulation controller.

use std::fmt;

use crate::id::Generation;
use crate::snapshot::Snapshot;

/// What caused a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The continuous loop completed a step.
    Tick,
    /// A manual single step completed.
    SingleStep,
    /// The loop left the running state without stepping, either through
    /// an explicit stop or because the generation limit was already met.
    Stopped,
    /// The world was reset to generation zero with every cell dead.
    Reset,
}

impl Trigger {
    /// `true` for triggers that advanced the generation counter.
    pub fn is_step(self) -> bool {
        matches!(self, Self::Tick | Self::SingleStep)
    }
}

/// Population bookkeeping for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StepStats {
    /// Live cells after the step.
    pub population: usize,
    /// Cells that were dead and became live.
    pub births: usize,
    /// Cells that were live and died.
    pub deaths: usize,
}

impl StepStats {
    /// `true` if the step changed no cell.
    pub fn is_still(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// State published to the observer after every completed step, reset
/// or stop.
///
/// Notifications from one controller arrive in the order they were
/// produced; step notifications carry consecutive generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Generation counter at the time of the notification.
    pub generation: Generation,
    /// Whether the continuous loop is still active.
    pub running: bool,
    /// The cell matrix at this generation.
    pub cells: Snapshot,
    /// What produced this notification.
    pub trigger: Trigger,
    /// Population bookkeeping of the step, zeroed for non-step triggers
    /// apart from `population`.
    pub stats: StepStats,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation: {}", self.generation)
    }
}
