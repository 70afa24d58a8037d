use thiserror::Error;

use crate::{dims::Dims, gameboard::CellWall};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The backtracking stack ran dry before every cell was visited, the grid is disconnected.
    #[error("generator exhausted after visiting {visited} of {total} cells")]
    GeneratorExhausted { visited: usize, total: usize },

    #[error("cannot knock down {wall:?} wall between {from} and {to}, cells are not adjacent")]
    InvalidOperation {
        from: Dims,
        to: Dims,
        wall: CellWall,
    },

    #[error("no path found between {start} and {end}")]
    PathNotFound { start: Dims, end: Dims },

    #[error("invalid maze size {0}")]
    InvalidSize(Dims),

    #[error("position {0} is outside of the maze")]
    OutOfBounds(Dims),
}
