//! Terminal condition checks. Both are read-only scans of the grid.

use crate::grid::{Grid, SIZE, TARGET_TILE};

/// True iff some tile has reached [`TARGET_TILE`].
pub fn has_won(grid: &Grid) -> bool {
    grid.values().any(|value| value == TARGET_TILE)
}

/// True iff a move is still possible: an empty cell exists, or some tile
/// equals its right or lower neighbor.
pub fn has_moves(grid: &Grid) -> bool {
    for y in 0..SIZE {
        for x in 0..SIZE {
            let value = grid.get(y, x);
            if value == 0 {
                return true;
            }
            if x + 1 < SIZE && value == grid.get(y, x + 1) {
                return true;
            }
            if y + 1 < SIZE && value == grid.get(y + 1, x) {
                return true;
            }
        }
    }
    false
}
