//! Sliding and merging.
//!
//! The merge rule is implemented once, for a single row collapsing toward
//! index 0. Every other direction rotates the grid so that the move becomes
//! a left move, merges, and rotates back.

use crate::grid::{Grid, Row, SIZE};
use crate::Direction;

/// Collapse a row to the left, merging each adjacent equal pair once.
///
/// Returns the new row and the points earned, which is the sum of every
/// merged tile created. A tile produced by a merge is never merged again
/// in the same pass, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
///
/// A pair whose sum does not fit in a cell (two `1 << 31` tiles) stays
/// unmerged.
pub fn merge_row(row: Row) -> (Row, u64) {
    let mut out = [0; SIZE];
    let mut cursor = 0;
    let mut score = 0;

    for cell in row {
        if cell == 0 {
            continue;
        }
        if out[cursor] == 0 {
            out[cursor] = cell;
            continue;
        }
        let merged = if out[cursor] == cell {
            out[cursor].checked_add(cell)
        } else {
            None
        };
        match merged {
            Some(value) => {
                out[cursor] = value;
                score += u64::from(value);
                cursor += 1;
            }
            None => {
                cursor += 1;
                out[cursor] = cell;
            }
        }
    }

    (out, score)
}

/// Merge every row of the grid to the left.
fn merge(grid: &Grid) -> (Grid, u64) {
    let mut rows = *grid.rows();
    let mut score = 0;
    for row in rows.iter_mut() {
        let (merged, points) = merge_row(*row);
        *row = merged;
        score += points;
    }
    (Grid::from_rows_unchecked(rows), score)
}

pub fn merge_left(grid: &Grid) -> (Grid, u64) {
    merge(grid)
}

pub fn merge_right(grid: &Grid) -> (Grid, u64) {
    let (merged, score) = merge(&grid.rotate_180());
    (merged.rotate_180(), score)
}

pub fn merge_up(grid: &Grid) -> (Grid, u64) {
    let (merged, score) = merge(&grid.rotate_ccw());
    (merged.rotate_cw(), score)
}

pub fn merge_down(grid: &Grid) -> (Grid, u64) {
    let (merged, score) = merge(&grid.rotate_cw());
    (merged.rotate_ccw(), score)
}

/// Apply a move in `direction`, returning the resulting grid and the
/// points it earned. The input grid is left untouched.
pub fn merge_in_direction(direction: Direction, grid: &Grid) -> (Grid, u64) {
    match direction {
        Direction::Up => merge_up(grid),
        Direction::Down => merge_down(grid),
        Direction::Left => merge_left(grid),
        Direction::Right => merge_right(grid),
    }
}

// =============================================================================
// Tests
// =============================================================================
