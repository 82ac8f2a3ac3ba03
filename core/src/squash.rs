//! Row collapse and the directional squash built on top of it.

use crate::grid::{Direction, Grid, Line, MoveResult, SIZE};

/// Collapse a line of 4 tiles toward index 0.
/// Returns the collapsed line and the points earned from merges.
///
/// Algorithm:
/// 1. Compress: move all non-zero values to the front
/// 2. Merge: combine adjacent equal values, each cell at most once
/// 3. Compress again
pub fn collapse_row(line: Line) -> (Line, u32) {
    let mut line = line;
    compress(&mut line);

    let mut points = 0;
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            points += line[i];
            line[i + 1] = 0;
        }
    }

    compress(&mut line);
    (line, points)
}

/// Move all non-zero values to the front, keeping their order.
fn compress(line: &mut Line) {
    let mut write_idx = 0;
    for read_idx in 0..SIZE {
        if line[read_idx] != 0 {
            if write_idx != read_idx {
                line[write_idx] = line[read_idx];
                line[read_idx] = 0;
            }
            write_idx += 1;
        }
    }
}

/// Read line `index` ordered so that its collapse target is element 0.
fn read_line(grid: &Grid, direction: Direction, index: usize) -> Line {
    match direction {
        Direction::Left => grid.row(index),
        Direction::Up => grid.column(index),
        Direction::Right => {
            let mut line = grid.row(index);
            line.reverse();
            line
        }
        Direction::Down => {
            let mut line = grid.column(index);
            line.reverse();
            line
        }
    }
}

/// Inverse of [`read_line`].
fn write_line(grid: &mut Grid, direction: Direction, index: usize, mut line: Line) {
    match direction {
        Direction::Left => grid.set_row(index, line),
        Direction::Up => grid.set_column(index, line),
        Direction::Right => {
            line.reverse();
            grid.set_row(index, line);
        }
        Direction::Down => {
            line.reverse();
            grid.set_column(index, line);
        }
    }
}

/// Squash every row (Left/Right) or column (Up/Down) of `grid` toward `direction`.
///
/// Lines are collapsed independently; the returned points are the sum over all four.
/// The input grid is left untouched.
pub fn squash(grid: &Grid, direction: Direction) -> MoveResult {
    let mut next = *grid;
    let mut points = 0;

    for index in 0..SIZE {
        let (line, gained) = collapse_row(read_line(grid, direction, index));
        write_line(&mut next, direction, index, line);
        points += gained;
    }

    MoveResult { grid: next, points }
}
