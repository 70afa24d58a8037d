pub mod cell;
pub use cell::{Cell, CellWall, Walls};
pub mod grid;
pub use grid::Grid;
