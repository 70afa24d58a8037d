pub mod cellular_automaton;
pub mod depth_first_search;
pub mod life_like;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{dims::Dims, error::MazeError, gameboard::Grid};

pub use cellular_automaton::{CellState, CellularAutomaton};
pub use depth_first_search::DepthFirstSearch;
pub use life_like::LifeLike;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Path through the maze, first item is the start, last is the end.
pub type Path = Vec<Dims>;

/// Returns the seed itself, or a fresh one when there is none, together with the seeded rng.
pub fn seeded_rng(seed: Option<u64>) -> (u64, Random) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (seed, Random::seed_from_u64(seed))
}

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Carves `grid` in place starting at `entry`.
    ///
    /// Returns the path from `entry` to `exit` if the generator happened to record it.
    fn generate(
        &self,
        grid: &mut Grid,
        entry: Dims,
        exit: Dims,
        rng: &mut Random,
    ) -> Result<Option<Path>, MazeError>;
}

pub trait MazeSolver: fmt::Debug + Sync + Send {
    /// Finds the path between `start` and `end` on an already carved grid.
    ///
    /// Must not modify the grid.
    fn solve(&self, grid: &Grid, start: Dims, end: Dims) -> Result<Path, MazeError>;
}
