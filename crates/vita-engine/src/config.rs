//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is read once by [`Controller::new`](crate::Controller::new),
//! which calls [`validate()`](SimConfig::validate) before anything else.
//! An invalid configuration is fatal: no controller is built.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use vita_core::Generation;
use vita_grid::GridError;

/// Smallest accepted grid width or height.
pub const MIN_GRID_DIM: u32 = 8;
/// Largest accepted grid width or height.
pub const MAX_GRID_DIM: u32 = 28;
/// Smallest accepted finite generation limit.
pub const MIN_GENERATION_LIMIT: u64 = 8;
/// Longest accepted tick interval.
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(60 * 60);

// ── MaxGenerations ─────────────────────────────────────────────────

/// How many generations the continuous loop may reach before stopping
/// on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaxGenerations {
    /// Run until stopped.
    #[default]
    Unbounded,
    /// Stop automatically once the generation counter reaches this value.
    Limit(u64),
}

impl MaxGenerations {
    /// The finite limit, if any.
    pub fn limit(self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Limit(n) => Some(n),
        }
    }

    /// Whether `generation` has reached the limit.
    pub fn is_reached(self, generation: Generation) -> bool {
        self.limit().is_some_and(|n| generation.0 >= n)
    }
}

/// `-1` means unbounded; any other value must be at least
/// [`MIN_GENERATION_LIMIT`].
impl TryFrom<i64> for MaxGenerations {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Unbounded),
            n if n >= MIN_GENERATION_LIMIT as i64 => Ok(Self::Limit(n as u64)),
            n => Err(ConfigError::InvalidGenerationLimit { value: n }),
        }
    }
}

impl fmt::Display for MaxGenerations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Limit(n) => write!(f, "{n}"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a controller.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid width or height outside `[MIN_GRID_DIM, MAX_GRID_DIM]`.
    InvalidDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A finite generation limit below [`MIN_GENERATION_LIMIT`], or a
    /// signed limit other than `-1` that is not positive.
    InvalidGenerationLimit {
        /// The rejected value.
        value: i64,
    },
    /// `tick_interval` is zero.
    InvalidTickInterval,
    /// `tick_interval` is longer than [`MAX_TICK_INTERVAL`].
    TickIntervalTooLong {
        /// The rejected value.
        value: Duration,
    },
    /// The grid could not be constructed.
    Grid(GridError),
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => write!(
                f,
                "grid dimensions are invalid ({name} = {value}) - \
                 minimum grid = {MIN_GRID_DIM}x{MIN_GRID_DIM} - \
                 maximum grid = {MAX_GRID_DIM}x{MAX_GRID_DIM}"
            ),
            Self::InvalidGenerationLimit { value } => write!(
                f,
                "generations must be unbounded (-1) or a value >= \
                 {MIN_GENERATION_LIMIT}, got {value}"
            ),
            Self::InvalidTickInterval => write!(f, "tick_interval must be non-zero"),
            Self::TickIntervalTooLong { value } => write!(
                f,
                "tick_interval {value:?} exceeds maximum {MAX_TICK_INTERVAL:?}"
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Startup configuration of a simulation. Immutable once the controller
/// is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid columns, `8..=28`. Default: 20.
    pub width: u32,
    /// Grid rows, `8..=28`. Default: 20.
    pub height: u32,
    /// Generation count at which the continuous loop stops itself.
    /// Default: unbounded.
    pub max_generations: MaxGenerations,
    /// Time between automatic steps. Default: 1 second.
    pub tick_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            max_generations: MaxGenerations::Unbounded,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SimConfig {
    /// Validate all startup invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Both dimensions inside the supported range.
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&value) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        // 2. A finite limit must leave room for a meaningful run.
        if let MaxGenerations::Limit(n) = self.max_generations {
            if n < MIN_GENERATION_LIMIT {
                return Err(ConfigError::InvalidGenerationLimit { value: n as i64 });
            }
        }
        // 3. A zero interval would turn the loop into a busy spin.
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTickInterval);
        }
        // 4. The loop schedules deadlines as `Instant + interval`.
        if self.tick_interval > MAX_TICK_INTERVAL {
            return Err(ConfigError::TickIntervalTooLong {
                value: self.tick_interval,
            });
        }
        Ok(())
    }
}
