//! Tile spawner: drops one new tile into a random empty cell.

use rand::Rng;
use tracing::trace;

use crate::grid::Grid;

/// Draw the value of a new tile: 4 with probability 1 in 10, otherwise 2.
pub fn draw_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) == 0 {
        4
    } else {
        2
    }
}

/// Spawn a new tile in a uniformly chosen empty cell.
///
/// Returns the `(row, col, value)` written, or `None` if the grid is full
/// (in which case the grid is not touched).
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(usize, usize, u32)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = draw_tile_value(rng);
    grid.set(row, col, value);
    trace!(row, col, value, "spawned tile");
    Some((row, col, value))
}
