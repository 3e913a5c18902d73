//! Turn sequencing: move, spawn, and game-over detection.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::error::SpawnError;
use crate::grid::Grid;
use crate::merge::merge_in_direction;
use crate::spawn::Spawner;
use crate::Direction;

/// Whether the game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Result of a single call to [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed (and a new tile was spawned).
    pub changed: bool,
    /// Points added to the score by this move.
    pub reward: u64,
    /// State after the move.
    pub state: GameState,
}

/// True if moving in `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    merge_in_direction(direction, grid).0 != *grid
}

/// Legal directions as `[Up, Down, Left, Right]`.
pub fn legal_moves(grid: &Grid) -> [bool; 4] {
    Direction::ALL.map(|d| can_move(grid, d))
}

/// True if no direction can change the grid.
pub fn is_over(grid: &Grid) -> bool {
    !Direction::ALL.iter().any(|&d| can_move(grid, d))
}

/// A single game of 2048.
///
/// Owns the grid, the score and the tile spawner. The only way to advance
/// the game is [`Game::apply_move`].
#[derive(Debug, Clone)]
pub struct Game<R = SmallRng> {
    grid: Grid,
    score: u64,
    state: GameState,
    spawner: Spawner<R>,
}

impl Game<SmallRng> {
    /// Create a new game whose tiles are drawn from `seed`.
    pub fn new(seed: u64) -> Self {
        Game::from_spawner(Spawner::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Game::from_spawner(Spawner::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// Create a new game drawing tiles from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Game::from_spawner(Spawner::new(rng))
    }

    fn from_spawner(spawner: Spawner<R>) -> Self {
        let mut game = Game {
            grid: Grid::new(),
            score: 0,
            state: GameState::Playing,
            spawner,
        };
        game.seed_grid();
        game
    }

    /// Start over with a fresh grid and zero score.
    ///
    /// The spawner keeps its generator, so the new game continues the same
    /// random stream rather than replaying the previous one.
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.state = GameState::Playing;
        self.seed_grid();
    }

    fn seed_grid(&mut self) {
        // an empty grid always has room for two tiles
        for _ in 0..2 {
            let _ = self.spawner.spawn(&mut self.grid);
        }
        tracing::info!(tiles = ?self.grid.rows(), "new game");
    }

    /// Play one turn in `direction`.
    ///
    /// A move that does not change the grid is a no-op: no points, no new
    /// tile. After an effective move a tile is spawned, and the game ends if
    /// there was no room for it or no direction can change the grid anymore.
    /// Once the game is over every call is a no-op until [`Game::restart`].
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state == GameState::GameOver {
            return self.outcome(false, 0);
        }

        let (candidate, reward) = merge_in_direction(direction, &self.grid);
        if candidate == self.grid {
            tracing::debug!(?direction, "move had no effect");
            return self.outcome(false, 0);
        }

        self.grid = candidate;
        self.score += reward;
        tracing::debug!(?direction, reward, score = self.score, "move applied");

        let spawned = self.spawner.spawn(&mut self.grid);
        if spawned == Err(SpawnError::NoEmptySpace) || is_over(&self.grid) {
            self.state = GameState::GameOver;
            tracing::info!(
                score = self.score,
                max_tile = self.grid.max_tile(),
                "game over"
            );
        }

        self.outcome(true, reward)
    }

    fn outcome(&self, changed: bool, reward: u64) -> MoveOutcome {
        MoveOutcome {
            changed,
            reward,
            state: self.state,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

// =============================================================================
// Tests
// =============================================================================
