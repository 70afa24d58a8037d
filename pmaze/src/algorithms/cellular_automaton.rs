use crate::{
    array::Array2D,
    dims::Dims,
    error::MazeError,
    gameboard::{CellWall, Grid},
};

use super::{MazeSolver, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Start,
    End,
    Open,
    Closed,
}

/// Dead-end pruning solver.
///
/// Repeatedly closes every open cell that has at most one way out, where walls, the grid
/// border and closed neighbors all count as blocked. On a perfect maze only the cells of the
/// single path between start and end survive, which is then walked from start to end.
///
/// Endpoints outside of the grid are clamped to the nearest cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellularAutomaton;

impl CellularAutomaton {
    /// Runs the pruning passes until nothing changes and returns the final states.
    pub fn prune(grid: &Grid, start: Dims, end: Dims) -> Result<Array2D<CellState>, MazeError> {
        let size = grid.size();
        let (start, end) = (grid.clamp(start), grid.clamp(end));

        let mut states =
            Array2D::new_dims(CellState::Open, size).ok_or(MazeError::InvalidSize(size))?;
        states[start] = CellState::Start;
        states[end] = CellState::End;

        let max_passes = grid.cell_count();
        for pass in 1..=max_passes {
            let mut closed = 0;
            for pos in Dims::iter_fill(Dims::ZERO, size) {
                if states[pos] != CellState::Open {
                    continue;
                }

                let exits = CellWall::get_in_order()
                    .into_iter()
                    .filter(|&wall| !Self::is_blocking(grid, &states, pos, wall))
                    .count();

                // In place, so later cells in this pass already see the closure.
                if exits < 2 {
                    states[pos] = CellState::Closed;
                    closed += 1;
                }
            }

            log::trace!("pruning pass {} closed {} cells", pass, closed);

            if closed == 0 {
                return Ok(states);
            }
        }

        Err(MazeError::PathNotFound { start, end })
    }

    fn is_blocking(grid: &Grid, states: &Array2D<CellState>, pos: Dims, wall: CellWall) -> bool {
        if !grid.is_open(pos, wall) {
            return true;
        }

        match states.get(pos + wall.to_coord()) {
            None => true,
            Some(state) => *state == CellState::Closed,
        }
    }

    /// Walks the surviving cells from start to end.
    fn reconstruct(
        grid: &Grid,
        states: &Array2D<CellState>,
        start: Dims,
        end: Dims,
    ) -> Result<Path, MazeError> {
        let size = grid.size();
        let mut seen = Array2D::new_dims(false, size).ok_or(MazeError::InvalidSize(size))?;
        let mut path = vec![start];
        seen[start] = true;

        let mut current = start;
        while current != end {
            let next = CellWall::get_in_order()
                .into_iter()
                .filter(|&wall| grid.is_open(current, wall))
                .map(|wall| current + wall.to_coord())
                .find(|&pos| {
                    states.get(pos).is_some_and(|s| *s != CellState::Closed)
                        && seen.get(pos).is_some_and(|visited| !visited)
                })
                .ok_or(MazeError::PathNotFound { start, end })?;

            seen[next] = true;
            path.push(next);
            current = next;
        }

        Ok(path)
    }
}

impl MazeSolver for CellularAutomaton {
    fn solve(&self, grid: &Grid, start: Dims, end: Dims) -> Result<Path, MazeError> {
        let (start, end) = {
            let (clamped_start, clamped_end) = (grid.clamp(start), grid.clamp(end));
            if clamped_start != start || clamped_end != end {
                log::warn!(
                    "solver endpoints {} -> {} clamped to {} -> {}",
                    start,
                    end,
                    clamped_start,
                    clamped_end
                );
            }
            (clamped_start, clamped_end)
        };

        if start == end {
            return Ok(vec![start]);
        }

        let states = Self::prune(grid, start, end)?;
        let path = Self::reconstruct(grid, &states, start, end)?;

        log::debug!("solved {} -> {} in {} steps", start, end, path.len() - 1);

        Ok(path)
    }
}
