/// Returned when a tile cannot be placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("no empty space left on the grid")]
    NoEmptySpace,
}

/// Errors raised when building a grid from caller-provided cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid tile {value} at ({row}, {col}): must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_display() {
        assert_eq!(
            SpawnError::NoEmptySpace.to_string(),
            "no empty space left on the grid"
        );
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::InvalidTile {
            row: 1,
            col: 2,
            value: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid tile 3 at (1, 2): must be 0 or a power of two >= 2"
        );
    }
}
