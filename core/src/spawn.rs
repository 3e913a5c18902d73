//! Random tile placement.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SpawnError;
use crate::grid::{Grid, Point};

/// Values a new tile is drawn from: a 2 three times out of four, otherwise a 4.
pub const SPAWN_VALUES: [u32; 4] = [2, 2, 2, 4];

/// Places new tiles using an owned random generator.
///
/// The generator is injectable so that tile placement can be replayed from
/// a seed.
#[derive(Debug, Clone)]
pub struct Spawner<R = SmallRng> {
    rng: R,
}

impl Spawner<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Spawner::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Spawner::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Spawner { rng }
    }

    /// Put a 2 or a 4 into a uniformly chosen empty cell of `grid`.
    ///
    /// Returns the filled position, or `SpawnError::NoEmptySpace` if the grid
    /// is full. On error the grid is not modified.
    pub fn spawn(&mut self, grid: &mut Grid) -> Result<Point, SpawnError> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return Err(SpawnError::NoEmptySpace);
        }

        let spot = empty[self.rng.gen_range(0..empty.len())];
        let value = SPAWN_VALUES[self.rng.gen_range(0..SPAWN_VALUES.len())];
        grid.set(spot, value);
        tracing::debug!(row = spot.row, col = spot.col, value, "spawned tile");
        Ok(spot)
    }
}
