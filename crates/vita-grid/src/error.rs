//! Error types for grid construction and edits.

use std::fmt;

/// Errors arising from grid construction or cell edits.
///
/// A failed edit never changes the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A coordinate is outside `[0, width) × [0, height)`.
    OutOfBounds {
        /// The offending column.
        x: i32,
        /// The offending row.
        y: i32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width × height` exceeds the largest supported cell count.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// The largest accepted cell count.
        max: usize,
    },
    /// A snapshot's dimensions differ from the grid's.
    DimensionMismatch {
        /// Grid `(width, height)`.
        expected: (u32, u32),
        /// Snapshot `(width, height)`.
        actual: (u32, u32),
    },
    /// Part of a pattern would land outside the grid.
    PatternOutOfBounds {
        /// Name of the pattern.
        name: &'static str,
        /// Requested origin column.
        x: i32,
        /// Requested origin row.
        y: i32,
    },
    /// A fill density outside `[0.0, 1.0]`.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "cell ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { width, height, max } => {
                write!(f, "{width}x{height} grid exceeds maximum of {max} cells")
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "snapshot is {}x{}, grid is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::PatternOutOfBounds { name, x, y } => {
                write!(f, "pattern '{name}' does not fit at ({x}, {y})")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0.0, 1.0], got {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}
