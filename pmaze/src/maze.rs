use serde::{Deserialize, Serialize};

use crate::{
    algorithms::{
        seeded_rng, CellularAutomaton, DepthFirstSearch, MazeGenerator, MazeSolver, Path, Random,
    },
    dims::Dims,
    error::MazeError,
    gameboard::{Grid, Walls},
};

/// Everything needed to build a [`Maze`]. Serializable, so it can live in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    pub size: Dims,

    /// Where the generator starts carving.
    #[serde(default)]
    pub entry: Dims,

    /// Cell whose generation path is recorded as the solution.
    ///
    /// Bottom right corner when not set.
    #[serde(default)]
    pub exit: Option<Dims>,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeSpec {
    pub fn new(size: Dims) -> Self {
        Self {
            size,
            entry: Dims::ZERO,
            exit: None,
            seed: None,
        }
    }

    pub fn exit(&self) -> Dims {
        self.exit.unwrap_or(self.size - Dims::ONE)
    }

    /// Builds the maze with [`DepthFirstSearch`], picking a random seed if none is set.
    pub fn build(&self) -> Result<Maze, MazeError> {
        let (seed, mut rng) = seeded_rng(self.seed);
        log::debug!("building {}x{} maze with seed {}", self.size.0, self.size.1, seed);

        let mut maze = Maze::build_with(
            &DepthFirstSearch,
            self.size,
            self.entry,
            self.exit(),
            &mut rng,
        )?;
        maze.seed = Some(seed);

        Ok(maze)
    }
}

/// A carved grid with its entry, exit and the latest known solution.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    entry: Dims,
    exit: Dims,
    seed: Option<u64>,
    solution: Option<Path>,
}

impl Maze {
    /// Builds a `nx` x `ny` maze carved from `entry`, the exit is the bottom right corner.
    pub fn build(nx: i32, ny: i32, entry: Dims, rng: &mut Random) -> Result<Maze, MazeError> {
        let size = Dims(nx, ny);
        Self::build_with(&DepthFirstSearch, size, entry, size - Dims::ONE, rng)
    }

    pub fn build_with(
        generator: &dyn MazeGenerator,
        size: Dims,
        entry: Dims,
        exit: Dims,
        rng: &mut Random,
    ) -> Result<Maze, MazeError> {
        let mut grid = Grid::new(size)?;
        for pos in [entry, exit] {
            if !grid.is_in_bounds(pos) {
                return Err(MazeError::OutOfBounds(pos));
            }
        }

        let solution = generator.generate(&mut grid, entry, exit, rng)?;

        Ok(Maze {
            grid,
            entry,
            exit,
            seed: None,
            solution,
        })
    }

    pub fn size(&self) -> Dims {
        self.grid.size()
    }

    pub fn entry(&self) -> Dims {
        self.entry
    }

    pub fn exit(&self) -> Dims {
        self.exit
    }

    /// Seed the maze was built from, only known when built through [`MazeSpec`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn walls(&self, x: i32, y: i32) -> Option<Walls> {
        self.grid.get_cell(Dims(x, y)).map(|cell| cell.walls())
    }

    /// Path captured during generation, or the result of the last successful [`Maze::solve`].
    pub fn solution(&self) -> Option<&[Dims]> {
        self.solution.as_deref()
    }

    /// Solves with [`CellularAutomaton`]. Endpoints outside of the maze are clamped.
    pub fn solve(&mut self, start: Dims, end: Dims) -> Result<Path, MazeError> {
        self.solve_with(&CellularAutomaton, start, end)
    }

    pub fn solve_with(
        &mut self,
        solver: &dyn MazeSolver,
        start: Dims,
        end: Dims,
    ) -> Result<Path, MazeError> {
        let path = solver.solve(&self.grid, start, end)?;
        self.solution = Some(path.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn spec_build_is_reproducible() {
        let mut spec = MazeSpec::new(Dims(6, 4));
        spec.seed = Some(1234);

        let a = spec.build().unwrap();
        let b = spec.build().unwrap();
        assert_eq!(a.seed(), Some(1234));
        for pos in Dims::iter_fill(Dims::ZERO, Dims(6, 4)) {
            assert_eq!(a.walls(pos.0, pos.1), b.walls(pos.0, pos.1));
        }
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn unseeded_spec_records_seed() {
        let maze = MazeSpec::new(Dims(3, 3)).build().unwrap();
        let seed = maze.seed().expect("seed is always recorded");

        let mut spec = MazeSpec::new(Dims(3, 3));
        spec.seed = Some(seed);
        let again = spec.build().unwrap();
        assert_eq!(maze.solution(), again.solution());
    }

    #[test]
    fn spec_from_ron_defaults() {
        let spec: MazeSpec = ron::from_str("(size: (5, 4))").unwrap();
        assert_eq!(spec, MazeSpec::new(Dims(5, 4)));
        assert_eq!(spec.exit(), Dims(4, 3));
    }

    #[test]
    fn build_rejects_bad_input() {
        let mut rng = Random::seed_from_u64(0);
        assert_eq!(
            Maze::build(0, 5, Dims::ZERO, &mut rng).unwrap_err(),
            MazeError::InvalidSize(Dims(0, 5))
        );
        assert_eq!(
            Maze::build(3, 3, Dims(3, 1), &mut rng).unwrap_err(),
            MazeError::OutOfBounds(Dims(3, 1))
        );

        let mut spec = MazeSpec::new(Dims(3, 3));
        spec.exit = Some(Dims(-1, 0));
        assert_eq!(spec.build().unwrap_err(), MazeError::OutOfBounds(Dims(-1, 0)));
    }

    #[test]
    fn walls_query_out_of_bounds() {
        let mut rng = Random::seed_from_u64(0);
        let maze = Maze::build(2, 2, Dims::ZERO, &mut rng).unwrap();
        assert!(maze.walls(2, 0).is_none());
        assert!(maze.walls(0, -1).is_none());
        assert!(maze.walls(1, 1).is_some_and(|w| w.south && w.east));
    }

    #[test]
    fn solve_supersedes_solution() {
        let mut rng = Random::seed_from_u64(3);
        let mut maze = Maze::build(4, 4, Dims::ZERO, &mut rng).unwrap();
        assert_eq!(maze.solution().and_then(|s| s.last()), Some(&Dims(3, 3)));

        let path = maze.solve(Dims(3, 0), Dims(0, 3)).unwrap();
        assert_eq!(maze.solution(), Some(path.as_slice()));
        assert_eq!(path.first(), Some(&Dims(3, 0)));
        assert_eq!(path.last(), Some(&Dims(0, 3)));
    }
}
