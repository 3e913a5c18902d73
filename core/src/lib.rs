//! # termtiles core
//!
//! Deterministic game-state engine for the 2048 sliding-tile puzzle: the
//! 4x4 grid, the merge rule, random tile spawning and game-over detection.
//! Tile placement comes from an injectable, seedable generator, so any game
//! can be replayed exactly.
//!
//! ## Example
//!
//! ```rust
//! use termtiles_core::{Direction, Game};
//!
//! let mut game = Game::new(42); // Create game with seed 42
//! let outcome = game.apply_move(Direction::Left);
//! println!("Score: {}, Changed: {}", game.score(), outcome.changed);
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod merge;
pub mod spawn;

pub use error::{GridError, SpawnError};
pub use game::{can_move, is_over, legal_moves, Game, GameState, MoveOutcome};
pub use grid::{Grid, Point, Row, SIZE};
pub use merge::{merge_in_direction, merge_row};
pub use spawn::Spawner;

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
    /// All four directions, in `[Up, Down, Left, Right]` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[cfg(test)]
mod testing {
    use rand::rngs::SmallRng;
    use rand::Rng;

    use crate::grid::{Grid, SIZE};

    /// A grid of random tiles up to 2048, with roughly one cell in twelve empty.
    pub(crate) fn random_grid(rng: &mut SmallRng) -> Grid {
        let mut rows = [[0; SIZE]; SIZE];
        for cell in rows.iter_mut().flatten() {
            let exp = rng.gen_range(0..=11);
            *cell = if exp == 0 { 0 } else { 1 << exp };
        }
        Grid::from_rows(rows).unwrap()
    }

    /// Sum of all cells.
    pub(crate) fn total(grid: &Grid) -> u64 {
        grid.rows().iter().flatten().map(|&v| u64::from(v)).sum()
    }
}
