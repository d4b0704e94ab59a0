//! Error types for core value construction.

use std::error::Error;
use std::fmt;

/// Errors from parsing a plaintext [`Snapshot`](crate::Snapshot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// No rows, or rows with no columns.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// A character that is neither a live nor a dead glyph.
    InvalidGlyph {
        /// The character found.
        glyph: char,
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// A dimension does not fit in `u32`.
    TooLarge {
        /// The offending length.
        value: usize,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "snapshot has no cells"),
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} columns, expected {expected}"
            ),
            Self::InvalidGlyph { glyph, row, col } => {
                write!(f, "invalid glyph {glyph:?} at row {row}, column {col}")
            }
            Self::TooLarge { value } => write!(f, "dimension {value} exceeds u32::MAX"),
        }
    }
}

impl Error for SnapshotError {}
