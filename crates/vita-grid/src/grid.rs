//! The double-buffered cell matrix.
//!
//! [`Grid`] keeps two equally sized buffers. [`Grid::step`] reads only
//! the current buffer and writes only the other one, then swaps them,
//! so every cell of generation N+1 is computed from generation N alone.
//! No cell ever sees a neighbour's already-updated state.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use vita_core::{CellAccess, Snapshot, StepStats};

use crate::error::GridError;
use crate::neighbourhood;
use crate::pattern::Pattern;
use crate::rule;

/// A fixed-size `width × height` matrix of live/dead cells.
///
/// Dimensions are set at construction and never change. Coordinates are
/// `(x, y)` with `x` the column and `y` the row; cells are stored
/// row-major.
///
/// # Examples
///
/// ```
/// use vita_grid::{CellAccess, Grid};
///
/// let mut grid = Grid::new(8, 8).unwrap();
/// grid.toggle(3, 4).unwrap();
/// assert!(grid.is_alive(3, 4));
///
/// // A lone cell dies of underpopulation.
/// let next = grid.step();
/// assert_eq!(next.population(), 0);
/// ```
#[derive(Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Current generation.
    cells: Vec<bool>,
    /// Write target of the next step.
    next: Vec<bool>,
    /// In-bounds neighbours of every cell, by flat index.
    neighbours: Vec<SmallVec<[usize; 8]>>,
    last_step: StepStats,
}

impl Grid {
    /// Largest accepted dimension: coordinates use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Largest accepted cell count (4096 x 4096). Each cell costs two
    /// state bytes plus a 72-byte neighbour list, so this caps a grid at
    /// roughly 1.2 GiB.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create a grid with every cell dead.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(GridError::TooManyCells)` if
    /// the area exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let n = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridError::TooManyCells {
                width,
                height,
                max: Self::MAX_CELLS,
            })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; n],
            next: vec![false; n],
            neighbours: neighbourhood::neighbour_table(width, height),
            last_step: StepStats::default(),
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// State of `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Set the state of `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flip the state of `(x, y)` and return the new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.last_step = StepStats::default();
    }

    /// Replace the whole matrix with the contents of `snapshot`.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), GridError> {
        if (snapshot.width(), snapshot.height()) != (self.width, self.height) {
            return Err(GridError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (snapshot.width(), snapshot.height()),
            });
        }
        self.cells.copy_from_slice(snapshot.cells());
        Ok(())
    }

    /// Bring every cell of `pattern` to life with its top-left corner at
    /// `(x, y)`. Other cells are left as they are.
    ///
    /// Either the whole pattern fits and is placed, or nothing changes.
    pub fn stamp(&mut self, pattern: &Pattern, x: i32, y: i32) -> Result<(), GridError> {
        let mut targets: SmallVec<[usize; 16]> = SmallVec::new();
        let out_of_bounds = || GridError::PatternOutOfBounds {
            name: pattern.name,
            x,
            y,
        };
        for &(dx, dy) in pattern.cells {
            let (cx, cy) = x
                .checked_add(dx)
                .zip(y.checked_add(dy))
                .ok_or_else(out_of_bounds)?;
            let i = self.index(cx, cy).map_err(|_| out_of_bounds())?;
            targets.push(i);
        }
        for i in targets {
            self.cells[i] = true;
        }
        Ok(())
    }

    /// Overwrite every cell with a seeded random state; each cell is live
    /// with probability `density`. The same seed always yields the same
    /// matrix.
    pub fn randomize(&mut self, seed: u64, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity { value: density });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
        Ok(())
    }

    /// Advance one generation and return the new matrix.
    ///
    /// The successor is computed in full into the back buffer before the
    /// buffers swap.
    pub fn step(&mut self) -> Snapshot {
        let cells = &self.cells;
        let neighbours = &self.neighbours;
        let mut stats = StepStats::default();

        for (i, next) in self.next.iter_mut().enumerate() {
            let alive = cells[i];
            let live = neighbourhood::live_neighbours(cells, &neighbours[i]);
            *next = rule::next_state(alive, live);
            match (alive, *next) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            if *next {
                stats.population += 1;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.last_step = stats;
        self.snapshot()
    }

    /// An immutable copy of the current matrix.
    pub fn snapshot(&self) -> Snapshot {
        let width = self.width as usize;
        Snapshot::from_fn(self.width, self.height, |x, y| {
            self.cells[y as usize * width + x as usize]
        })
    }

    /// Population bookkeeping of the most recent step. Zeroed by
    /// [`clear`](Self::clear).
    pub fn last_step(&self) -> StepStats {
        self.last_step
    }
}

impl CellAccess for Grid {
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

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        write!(f, "{}", self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BLINKER, BLOCK, GLIDER};

    fn grid_from(rows: &[&str]) -> Grid {
        let snap = Snapshot::from_rows(rows).unwrap();
        let mut grid = Grid::new(snap.width(), snap.height()).unwrap();
        grid.load(&snap).unwrap();
        grid
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_grid_is_all_dead() {
        let g = Grid::new(10, 12).unwrap();
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 12);
        assert_eq!(g.cell_count(), 120);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(Grid::new(0, 5).unwrap_err(), GridError::EmptyGrid);
        assert_eq!(Grid::new(5, 0).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn new_rejects_too_many_cells() {
        assert_eq!(
            Grid::new(4097, 4096).unwrap_err(),
            GridError::TooManyCells {
                width: 4097,
                height: 4096,
                max: Grid::MAX_CELLS
            }
        );
        // Both dimensions individually valid, area overflowing 32 bits.
        let side = i32::MAX as u32;
        assert!(matches!(
            Grid::new(side, side),
            Err(GridError::TooManyCells { .. })
        ));
    }

    // ── Edits ───────────────────────────────────────────────────

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut g = Grid::new(8, 8).unwrap();
        assert_eq!(g.toggle(2, 5), Ok(true));
        assert_eq!(g.population(), 1);
        assert!(g.is_alive(2, 5));
        assert!(!g.is_alive(5, 2));
        assert_eq!(g.toggle(2, 5), Ok(false));
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn toggle_out_of_bounds_leaves_grid_unchanged() {
        let mut g = Grid::new(8, 8).unwrap();
        g.toggle(0, 0).unwrap();
        let before = g.snapshot();
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (i32::MAX, i32::MIN)] {
            assert_eq!(
                g.toggle(x, y),
                Err(GridError::OutOfBounds {
                    x,
                    y,
                    width: 8,
                    height: 8
                })
            );
        }
        assert_eq!(g.snapshot(), before);
    }

    #[test]
    fn clear_kills_everything() {
        let mut g = Grid::new(8, 8).unwrap();
        g.randomize(7, 0.5).unwrap();
        g.step();
        g.clear();
        assert_eq!(g.population(), 0);
        assert_eq!(g.last_step(), StepStats::default());
    }

    #[test]
    fn load_rejects_wrong_shape() {
        let mut g = Grid::new(8, 8).unwrap();
        let snap = Snapshot::dead(9, 8);
        assert_eq!(
            g.load(&snap),
            Err(GridError::DimensionMismatch {
                expected: (8, 8),
                actual: (9, 8)
            })
        );
    }

    #[test]
    fn stamp_places_pattern_at_origin() {
        let mut g = Grid::new(8, 8).unwrap();
        g.stamp(&GLIDER, 2, 3).unwrap();
        assert_eq!(g.population(), 5);
        assert!(g.is_alive(3, 3));
        assert!(g.is_alive(4, 4));
        assert!(g.is_alive(2, 5));
    }

    #[test]
    fn stamp_that_does_not_fit_changes_nothing() {
        let mut g = Grid::new(8, 8).unwrap();
        assert_eq!(
            g.stamp(&BLINKER, 6, 0),
            Err(GridError::PatternOutOfBounds {
                name: "Blinker",
                x: 6,
                y: 0
            })
        );
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.randomize(42, 0.3).unwrap();
        b.randomize(42, 0.3).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert!(a.population() > 0);

        b.randomize(43, 0.3).unwrap();
        assert_ne!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn randomize_density_extremes() {
        let mut g = Grid::new(8, 8).unwrap();
        g.randomize(1, 1.0).unwrap();
        assert_eq!(g.population(), 64);
        g.randomize(1, 0.0).unwrap();
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn randomize_rejects_bad_density() {
        let mut g = Grid::new(8, 8).unwrap();
        for bad in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                g.randomize(1, bad),
                Err(GridError::InvalidDensity { .. })
            ));
        }
    }

    // ── Step ────────────────────────────────────────────────────

    #[test]
    fn blinker_oscillates_with_period_two() {
        let start = [".....", ".....", ".###.", ".....", "....."];
        let mut g = grid_from(&start);
        let original = g.snapshot();

        let one = g.step();
        assert_eq!(
            one,
            Snapshot::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap()
        );
        assert_ne!(one, original);

        let two = g.step();
        assert_eq!(two, original);
    }

    #[test]
    fn block_is_still() {
        let mut g = Grid::new(8, 8).unwrap();
        g.stamp(&BLOCK, 3, 3).unwrap();
        let before = g.snapshot();
        assert_eq!(g.step(), before);
        assert!(g.last_step().is_still());
        assert_eq!(g.last_step().population, 4);
    }

    #[test]
    fn step_uses_previous_generation_only() {
        // Row-major in-place update would see the top cell die before
        // evaluating the middle one and lose the vertical phase.
        let mut g = grid_from(&["...", "###", "..."]);
        let next = g.step();
        assert_eq!(next, Snapshot::from_rows(&[".#.", ".#.", ".#."]).unwrap());
        assert_eq!(g.last_step().births, 2);
        assert_eq!(g.last_step().deaths, 2);
    }

    #[test]
    fn corner_block_survives_without_wraparound() {
        // With wraparound (5, 0) would be a fourth neighbour of (0, 0).
        let mut g = grid_from(&["##...#", "##....", "......", "...#.."]);
        let next = g.step();
        assert!(next.is_alive(0, 0));
        assert!(next.is_alive(1, 1));
        assert!(!next.is_alive(5, 0));
        assert!(!next.is_alive(3, 3));
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn step_returns_current_state() {
        let mut g = Grid::new(8, 8).unwrap();
        g.stamp(&GLIDER, 0, 0).unwrap();
        let returned = g.step();
        assert_eq!(returned, g.snapshot());
    }

    #[test]
    fn debug_shows_picture() {
        let g = grid_from(&["#.", ".#"]);
        assert_eq!(format!("{g:?}"), "Grid 2x2\n#.\n.#");
    }
}
