//! The 4x4 board and its pure geometric operations.

use std::fmt;

use crate::error::GridError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// One row of cells, read left to right. `0` is an empty cell.
pub type Row = [u32; SIZE];

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }
}

/// The 2048 board.
///
/// Stored as four rows in reading order. Every cell is either `0` (empty)
/// or a power of two. Cells can only be written from inside the crate, by
/// the merge and spawn paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; SIZE],
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from explicit rows, rejecting cells that are neither
    /// zero nor a power of two.
    pub fn from_rows(rows: [Row; SIZE]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Grid { rows })
    }

    pub(crate) const fn from_rows_unchecked(rows: [Row; SIZE]) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Row; SIZE] {
        &self.rows
    }

    pub fn get(&self, point: Point) -> u32 {
        self.rows[point.row][point.col]
    }

    pub(crate) fn set(&mut self, point: Point, value: u32) {
        self.rows[point.row][point.col] = value;
    }

    /// All empty positions, in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        self.points().filter(|&p| self.get(p) == 0).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board, `0` for an empty grid.
    pub fn max_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_cw(&self) -> Self {
        let mut out = [[0; SIZE]; SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[SIZE - 1 - c][r];
            }
        }
        Grid { rows: out }
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_ccw(&self) -> Self {
        let mut out = [[0; SIZE]; SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[c][SIZE - 1 - r];
            }
        }
        Grid { rows: out }
    }

    /// Rotate a half turn.
    pub fn rotate_180(&self) -> Self {
        let mut out = [[0; SIZE]; SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[SIZE - 1 - r][SIZE - 1 - c];
            }
        }
        Grid { rows: out }
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Point::new(row, col)))
    }
}

fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.rows {
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

// =============================================================================
// Tests
// =============================================================================
