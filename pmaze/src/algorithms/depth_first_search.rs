use rand::seq::SliceRandom as _;

use crate::{dims::Dims, error::MazeError, gameboard::Grid};

use super::{MazeGenerator, Path, Random};

/// Randomized depth-first backtracking.
///
/// Produces a perfect maze: every cell is visited exactly once, so exactly
/// `cell_count - 1` walls are knocked down and the open walls form a spanning tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        grid: &mut Grid,
        entry: Dims,
        exit: Dims,
        rng: &mut Random,
    ) -> Result<Option<Path>, MazeError> {
        if !grid.is_in_bounds(entry) {
            return Err(MazeError::OutOfBounds(entry));
        }

        let total = grid.cell_count();
        let mut stack = Vec::with_capacity(total);
        let mut solution = (entry == exit).then(|| vec![entry]);

        let mut current = entry;
        let mut visited = 1;
        while visited < total {
            let unvisited_neighbors = grid.unvisited_neighbors(current);

            let Some(&(wall, next)) = unvisited_neighbors.choose(rng) else {
                current = stack
                    .pop()
                    .ok_or(MazeError::GeneratorExhausted { visited, total })?;
                continue;
            };

            grid.knock_down_wall(current, next, wall)?;
            stack.push(current);
            current = next;
            visited += 1;

            // Every cell is entered once, so this fires at most once.
            if current == exit {
                let mut path = stack.clone();
                path.push(current);
                solution = Some(path);
            }
        }

        log::debug!(
            "carved {} walls in {}x{} grid, solution captured: {}",
            total - 1,
            grid.size().0,
            grid.size().1,
            solution.is_some()
        );

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::gameboard::CellWall;

    fn carve(size: Dims, entry: Dims, seed: u64) -> (Grid, Option<Path>) {
        let mut grid = Grid::new(size).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        let solution = DepthFirstSearch
            .generate(&mut grid, entry, size - Dims::ONE, &mut rng)
            .unwrap();
        (grid, solution)
    }

    #[test]
    fn carves_spanning_tree_wall_count() {
        for seed in 0..8 {
            let (grid, _) = carve(Dims(7, 5), Dims(0, 0), seed);
            assert_eq!(grid.open_walls(), 7 * 5 - 1);
            assert!(grid.iter_cells().all(|cell| !cell.has_all_walls()));
        }
    }

    #[test]
    fn captured_solution_walks_open_walls() {
        let (grid, solution) = carve(Dims(6, 6), Dims(2, 3), 42);
        let solution = solution.expect("exit is always reached");

        assert_eq!(solution.first(), Some(&Dims(2, 3)));
        assert_eq!(solution.last(), Some(&Dims(5, 5)));
        for pair in solution.windows(2) {
            let wall = Grid::which_wall_between(pair[0], pair[1]).expect("adjacent");
            assert!(grid.is_open(pair[0], wall));
        }
    }

    #[test]
    fn single_cell_grid() {
        let (grid, solution) = carve(Dims(1, 1), Dims(0, 0), 0);
        assert_eq!(grid.open_walls(), 0);
        assert_eq!(solution, Some(vec![Dims(0, 0)]));
    }

    #[test]
    fn single_row_is_a_corridor() {
        let (grid, solution) = carve(Dims(5, 1), Dims(0, 0), 3);
        for x in 0..4 {
            assert!(grid.is_open(Dims(x, 0), CellWall::East));
        }
        assert_eq!(solution.map(|s| s.len()), Some(5));
    }

    #[test]
    fn entry_outside_grid_fails() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        let mut rng = Random::seed_from_u64(0);
        let err = DepthFirstSearch
            .generate(&mut grid, Dims(3, 0), Dims(2, 2), &mut rng)
            .unwrap_err();
        assert_eq!(err, MazeError::OutOfBounds(Dims(3, 0)));
    }

    #[test]
    fn already_carved_grid_exhausts_stack() {
        let mut grid = Grid::new(Dims(2, 1)).unwrap();
        grid.knock_down_wall(Dims(0, 0), Dims(1, 0), CellWall::East)
            .unwrap();

        let mut rng = Random::seed_from_u64(0);
        let err = DepthFirstSearch
            .generate(&mut grid, Dims(0, 0), Dims(1, 0), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            MazeError::GeneratorExhausted {
                visited: 1,
                total: 2
            }
        );
    }
}
