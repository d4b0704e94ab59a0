//! The B3/S23 Life rule.

/// State of a cell in the next generation.
///
/// A cell is live next generation iff it has exactly 3 live neighbours,
/// or it is live now and has exactly 2.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_with_two_or_three() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
        }
    }

    #[test]
    fn dead_cell_born_with_exactly_three() {
        for n in 0..=8u8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }
}
