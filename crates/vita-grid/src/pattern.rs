//! Classic Life patterns for seeding a grid.
//!
//! Cells are `(x, y)` offsets from the pattern's top-left corner.

/// A named set of live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Display name.
    pub name: &'static str,
    /// Live cell offsets `(x, y)` from the top-left corner.
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Width of the bounding box.
    pub fn width(&self) -> u32 {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) as u32
    }

    /// Height of the bounding box.
    pub fn height(&self) -> u32 {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) as u32
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator made of two diagonal blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ],
};

/// Smallest spaceship, travelling south-east.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Methuselah.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// Lightweight spaceship, travelling west.
pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    cells: &[
        (1, 0),
        (4, 0),
        (0, 1),
        (0, 2),
        (4, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 3),
    ],
};

/// Every built-in pattern.
pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO, LWSS];

/// Look up a built-in pattern by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_boxes() {
        assert_eq!((BLOCK.width(), BLOCK.height()), (2, 2));
        assert_eq!((BLINKER.width(), BLINKER.height()), (3, 1));
        assert_eq!((GLIDER.width(), GLIDER.height()), (3, 3));
        assert_eq!((LWSS.width(), LWSS.height()), (5, 4));
    }

    #[test]
    fn every_pattern_fits_smallest_grid() {
        for p in PATTERNS {
            assert!(p.width() <= 8 && p.height() <= 8, "{} too large", p.name);
            assert!(p.population() > 0);
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("glider"), Some(&GLIDER));
        assert_eq!(find("r-PENTOMINO"), Some(&R_PENTOMINO));
        assert_eq!(find("gun"), None);
    }
}
