//! The 4×4 tile matrix and the directions it can be squashed in.

use std::fmt;

/// Side length of the grid.
pub const SIZE: usize = 4;

/// Tile value that wins the game.
pub const TARGET_TILE: u32 = 2048;

/// One row or column, ordered toward the cell the tiles collapse onto.
pub type Line = [u32; SIZE];

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    /// Returns None for invalid values.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Get all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A 4×4 grid of tiles indexed as `[row][col]`, row 0 at the top.
///
/// Empty cells are 0; every other cell holds a power of two, at least 2.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    /// A grid with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        Grid { cells }
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Value at `(row, col)`. Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Overwrite the value at `(row, col)`. Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    /// Column `col` read top to bottom.
    pub fn column(&self, col: usize) -> Line {
        [
            self.cells[0][col],
            self.cells[1][col],
            self.cells[2][col],
            self.cells[3][col],
        ]
    }

    /// Write `line` into column `col`, top to bottom.
    pub fn set_column(&mut self, col: usize, line: Line) {
        for (row, value) in line.into_iter().enumerate() {
            self.cells[row][col] = value;
        }
    }

    /// All tile values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    cells.push((y, x));
                }
            }
        }
        cells
    }

    pub fn empty_count(&self) -> usize {
        self.values().filter(|&v| v == 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.values().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.values().map(u64::from).sum()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in &self.cells {
            for &val in row {
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.cells {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

/// Outcome of squashing a grid once: the new grid and the points its merges earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub points: u32,
}
