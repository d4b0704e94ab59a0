//! Benchmark profiles for the Vita Life engine.
//!
//! - [`max_profile`]: the largest supported grid, randomly seeded
//! - [`soup_profile`]: an arbitrary-size random soup for scaling runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vita_grid::{Grid, GridError};

/// Density used by every random profile.
pub const SOUP_DENSITY: f64 = 0.35;

/// 28x28 grid (784 cells) filled with a seeded random soup.
pub fn max_profile(seed: u64) -> Result<Grid, GridError> {
    soup_profile(28, 28, seed)
}

/// `width × height` grid filled with a seeded random soup.
pub fn soup_profile(width: u32, height: u32, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    grid.randomize(seed, SOUP_DENSITY)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::CellAccess;

    #[test]
    fn max_profile_is_28_square() {
        let grid = max_profile(42).unwrap();
        assert_eq!((grid.width(), grid.height()), (28, 28));
        assert!(grid.population() > 0);
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = soup_profile(64, 64, 7).unwrap().snapshot();
        let b = soup_profile(64, 64, 7).unwrap().snapshot();
        assert_eq!(a, b);
    }
}
