//! Command inputs and run states of the simulation controller.

use std::fmt;

/// A control input accepted by the simulation controller.
///
/// These are the only ways the presentation layer can change the world.
///
/// # Examples
///
/// ```
/// use vita_core::Command;
///
/// let cmd = Command::ToggleCell { x: 3, y: 7 };
/// assert!(matches!(cmd, Command::ToggleCell { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Flip the state of the cell at column `x`, row `y`.
    ToggleCell {
        /// Column, `0..width`.
        x: i32,
        /// Row, `0..height`.
        y: i32,
    },
    /// Begin continuous advancement.
    Start,
    /// Halt continuous advancement at the next tick boundary.
    Stop,
    /// Stop, clear every cell and return the generation counter to zero.
    Reset,
    /// Advance exactly one generation. Only valid while stopped.
    SingleStep,
}

/// Whether the continuous-advancement loop is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No background loop is stepping the grid. Initial state.
    #[default]
    Stopped,
    /// The background loop is advancing one generation per tick.
    Running,
}

impl RunState {
    /// `true` for [`RunState::Running`].
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
        }
    }
}
