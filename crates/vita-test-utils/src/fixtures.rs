//! Reusable grid fixtures.
//!
//! - [`blinker_grid`]: a horizontal blinker centred on an empty grid.
//! - [`glider_grid`]: a glider in the top-left corner.
//! - [`full_grid`]: every cell live.

use vita_core::Snapshot;
use vita_grid::pattern::{BLINKER, GLIDER};
use vita_grid::{Grid, GridError};

/// `width × height` grid with a horizontal blinker centred on it.
pub fn blinker_grid(width: u32, height: u32) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    grid.stamp(&BLINKER, width as i32 / 2 - 1, height as i32 / 2)?;
    Ok(grid)
}

/// `width × height` grid with a glider whose bounding box starts at the
/// origin.
pub fn glider_grid(width: u32, height: u32) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    grid.stamp(&GLIDER, 0, 0)?;
    Ok(grid)
}

/// Snapshot with every cell live.
pub fn full_grid(width: u32, height: u32) -> Snapshot {
    Snapshot::from_fn(width, height, |_, _| true)
}
