//! Immutable copies of the cell matrix.
//!
//! A [`Snapshot`] is what the grid engine hands out to everyone else:
//! the controller's notifications, the presentation layer and tests.
//! Cells are stored row-major behind an `Arc`, so cloning a snapshot
//! for each observer is cheap and a snapshot can never observe a
//! half-applied step.

use std::fmt;
use std::sync::Arc;

use crate::error::SnapshotError;
use crate::traits::CellAccess;

/// Glyph used for live cells by [`Display`](fmt::Display).
pub const LIVE_GLYPH: char = '#';
/// Glyph used for dead cells by [`Display`](fmt::Display).
pub const DEAD_GLYPH: char = '.';

/// A read-only `width × height` matrix of cell states.
///
/// # Examples
///
/// ```
/// use vita_core::{CellAccess, Snapshot};
///
/// let snap = Snapshot::from_rows(&[
///     ".....",
///     "..#..",
///     "..#..",
///     "..#..",
///     ".....",
/// ]).unwrap();
/// assert_eq!(snap.population(), 3);
/// assert!(snap.is_alive(2, 1));
/// assert!(!snap.is_alive(-1, 0));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    width: u32,
    height: u32,
    cells: Arc<[bool]>,
}

impl Snapshot {
    /// A snapshot with every cell dead.
    pub fn dead(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Build a snapshot by evaluating `f(x, y)` for every cell in
    /// row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells: cells.into(),
        }
    }

    /// Parse a plaintext picture, one string per row.
    ///
    /// `#` and `O` are live, `.` is dead. All rows must have the same
    /// length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SnapshotError> {
        let first = rows.first().ok_or(SnapshotError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(SnapshotError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(SnapshotError::RaggedRows {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    '#' | 'O' => cells.push(true),
                    '.' => cells.push(false),
                    _ => return Err(SnapshotError::InvalidGlyph { glyph, row, col }),
                }
            }
        }

        let width = u32::try_from(width).map_err(|_| SnapshotError::TooLarge { value: width })?;
        let height = u32::try_from(rows.len()).map_err(|_| SnapshotError::TooLarge {
            value: rows.len(),
        })?;
        Ok(Self {
            width,
            height,
            cells: cells.into(),
        })
    }

    /// Cell states in row-major order (`index = y * width + x`).
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Coordinates `(x, y)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    /// State of `(x, y)`, or `None` outside the matrix.
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// `true` if no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }
}

impl CellAccess for Snapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                let glyph = if alive { LIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

// Printing the picture makes failed grid assertions readable.
impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot {}x{}", self.width, self.height)?;
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_snapshot_has_no_population() {
        let s = Snapshot::dead(8, 10);
        assert_eq!(s.width(), 8);
        assert_eq!(s.height(), 10);
        assert_eq!(s.cells().len(), 80);
        assert_eq!(s.population(), 0);
        assert!(s.is_extinct());
    }

    #[test]
    fn from_fn_is_row_major() {
        let s = Snapshot::from_fn(3, 2, |x, y| x == 2 && y == 1);
        assert_eq!(s.cells(), &[false, false, false, false, false, true]);
        assert_eq!(s.get(2, 1), Some(true));
        assert_eq!(s.live_cells().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    #[test]
    fn get_outside_bounds_is_none() {
        let s = Snapshot::dead(4, 4);
        assert_eq!(s.get(-1, 0), None);
        assert_eq!(s.get(0, 4), None);
        assert_eq!(s.get(4, 0), None);
        assert!(!s.is_alive(100, 100));
    }

    #[test]
    fn display_round_trips_through_from_rows() {
        let rows = ["..#.", "#..#", "...."];
        let s = Snapshot::from_rows(&rows).unwrap();
        assert_eq!(s.to_string(), rows.join("\n"));
        assert_eq!(s.rows().count(), 3);
    }

    #[test]
    fn from_rows_accepts_o_glyph() {
        let s = Snapshot::from_rows(&["O.", ".O"]).unwrap();
        assert_eq!(s.population(), 2);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        match Snapshot::from_rows(&["...", ".."]) {
            Err(SnapshotError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2,
            }) => {}
            other => panic!("expected RaggedRows, got {other:?}"),
        }
    }

    #[test]
    fn from_rows_rejects_bad_glyph() {
        match Snapshot::from_rows(&["..x"]) {
            Err(SnapshotError::InvalidGlyph {
                glyph: 'x',
                row: 0,
                col: 2,
            }) => {}
            other => panic!("expected InvalidGlyph, got {other:?}"),
        }
    }

    #[test]
    fn from_rows_rejects_empty() {
        let none: [&str; 0] = [];
        assert_eq!(Snapshot::from_rows(&none), Err(SnapshotError::Empty));
        assert_eq!(Snapshot::from_rows(&[""]), Err(SnapshotError::Empty));
    }

    #[test]
    fn clones_share_storage() {
        let a = Snapshot::from_rows(&["#."]).unwrap();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.cells, &b.cells));
        assert_eq!(a, b);
    }
}
