//! Perfect maze generation over rectangular grids.
//!
//! A [`Maze`] is carved once by randomized depth-first backtracking, which also records the
//! path from the entry to the exit, and can then be solved between any two cells by
//! dead-end pruning.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod gameboard;
pub mod maze;

pub use dims::Dims;
pub use error::MazeError;
pub use maze::{Maze, MazeSpec};
