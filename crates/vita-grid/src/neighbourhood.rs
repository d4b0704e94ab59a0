//! Moore (8-connected) neighbourhood on a dead-bordered grid.
//!
//! Offsets landing outside `[0, width) × [0, height)` are dropped, so
//! corner cells have 3 neighbours, edge cells 5 and interior cells 8.

use smallvec::SmallVec;

/// All 8 `(dx, dy)` offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolve a single axis value. `None` outside `[0, len)`.
fn resolve_axis(val: i32, len: u32) -> Option<usize> {
    if val >= 0 && (val as u32) < len {
        Some(val as usize)
    } else {
        None
    }
}

/// Flat (row-major) indices of the in-bounds neighbours of `(x, y)`.
pub fn neighbours_flat(x: i32, y: i32, width: u32, height: u32) -> SmallVec<[usize; 8]> {
    let mut result = SmallVec::new();
    for (dx, dy) in OFFSETS_8 {
        let nx = resolve_axis(x + dx, width);
        let ny = resolve_axis(y + dy, height);
        if let (Some(nx), Some(ny)) = (nx, ny) {
            result.push(ny * width as usize + nx);
        }
    }
    result
}

/// Neighbour table for every cell of a `width × height` grid, indexed
/// by flat cell index.
pub fn neighbour_table(width: u32, height: u32) -> Vec<SmallVec<[usize; 8]>> {
    let mut table = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            table.push(neighbours_flat(x, y, width, height));
        }
    }
    table
}

/// Count live neighbours of a cell given its precomputed neighbour list.
pub fn live_neighbours(cells: &[bool], neighbours: &[usize]) -> u8 {
    neighbours.iter().filter(|&&n| cells[n]).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interior_has_eight() {
        assert_eq!(neighbours_flat(2, 2, 5, 5).len(), 8);
    }

    #[test]
    fn corner_has_three() {
        let n = neighbours_flat(0, 0, 5, 5);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&1)); // (1, 0)
        assert!(n.contains(&5)); // (0, 1)
        assert!(n.contains(&6)); // (1, 1)
    }

    #[test]
    fn edge_has_five() {
        assert_eq!(neighbours_flat(2, 0, 5, 5).len(), 5);
        assert_eq!(neighbours_flat(4, 2, 5, 5).len(), 5);
    }

    #[test]
    fn far_corner_does_not_wrap() {
        let n = neighbours_flat(4, 4, 5, 5);
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&0));
    }

    #[test]
    fn single_cell_has_none() {
        assert!(neighbours_flat(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn live_neighbours_counts_only_listed_cells() {
        // 3x3, all live: centre sees 8, corner sees 3.
        let cells = vec![true; 9];
        let table = neighbour_table(3, 3);
        assert_eq!(live_neighbours(&cells, &table[4]), 8);
        assert_eq!(live_neighbours(&cells, &table[0]), 3);
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            width in 1u32..12,
            height in 1u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            let x = x % width as i32;
            let y = y % height as i32;
            let table = neighbour_table(width, height);
            let me = y as usize * width as usize + x as usize;
            for &nb in &table[me] {
                prop_assert!(
                    table[nb].contains(&me),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, me,
                );
                prop_assert_ne!(nb, me);
            }
        }
    }
}
