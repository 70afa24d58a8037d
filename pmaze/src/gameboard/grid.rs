use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Dims,
    error::MazeError,
    gameboard::cell::{Cell, CellWall},
};

use self::CellWall::*;

/// Candidate list for a single cell, there are never more than four.
pub type Neighbors = SmallVec<[(CellWall, Dims); 4]>;

#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a grid with every wall standing.
    pub fn new(size: Dims) -> Result<Self, MazeError> {
        if !size.all_positive() {
            return Err(MazeError::InvalidSize(size));
        }

        let mut cells = Array2D::new_dims(Cell::new(Dims::ZERO), size)
            .ok_or(MazeError::InvalidSize(size))?;
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            cells[pos] = Cell::new(pos);
        }

        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        let Dims(w, h) = self.size();
        w as usize * h as usize
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn clamp(&self, pos: Dims) -> Dims {
        pos.clamp_into(self.size())
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<&Cell> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        self.cells.get(pos + wall.to_coord())
    }

    /// Wall is absent. Out of bounds positions count as closed.
    pub fn is_open(&self, pos: Dims, wall: CellWall) -> bool {
        self.get_cell(pos).is_some_and(|cell| cell.is_open(wall))
    }

    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        let dx = cell2.0.checked_sub(cell.0)?;
        let dy = cell2.1.checked_sub(cell.1)?;
        match (dx, dy) {
            (0, -1) => Some(North),
            (0, 1) => Some(South),
            (1, 0) => Some(East),
            (-1, 0) => Some(West),
            _ => None,
        }
    }

    /// Neighbors still sealed on all four sides, in [`CellWall::get_in_order`] order.
    pub fn unvisited_neighbors(&self, pos: Dims) -> Neighbors {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| {
                self.neighbor(pos, wall)
                    .filter(|cell| cell.has_all_walls())
                    .map(|cell| (wall, cell.get_coord()))
            })
            .collect()
    }

    /// Removes `wall` from `from` and its reverse from `to`.
    pub fn knock_down_wall(
        &mut self,
        from: Dims,
        to: Dims,
        wall: CellWall,
    ) -> Result<(), MazeError> {
        // Bounds first, so the offset can't overflow.
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) || from + wall.to_coord() != to {
            return Err(MazeError::InvalidOperation { from, to, wall });
        }

        self.cells[from].remove_wall(wall);
        self.cells[to].remove_wall(wall.reverse_wall());

        Ok(())
    }

    /// Number of removed inner walls, each shared wall counted once.
    pub fn open_walls(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.is_open(East) as usize + cell.is_open(South) as usize)
            .sum()
    }
}
