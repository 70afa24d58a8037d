use serde::{Deserialize, Serialize};

use crate::dims::Dims;

use self::CellWall::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWall {
    North,
    South,
    East,
    West,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            North => Dims(0, -1),
            South => Dims(0, 1),
            East => Dims(1, 0),
            West => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// Fixed enumeration order used for neighbor candidates and path reconstruction.
    pub fn get_in_order() -> [CellWall; 4] {
        [West, East, South, North]
    }
}

/// Wall flags of a single cell, `true` means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Walls {
    pub const ALL: Walls = Walls {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    pub fn get(&self, wall: CellWall) -> bool {
        match wall {
            North => self.north,
            South => self.south,
            East => self.east,
            West => self.west,
        }
    }

    pub fn set(&mut self, wall: CellWall, present: bool) {
        match wall {
            North => self.north = present,
            South => self.south = present,
            East => self.east = present,
            West => self.west = present,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cell {
    walls: Walls,
    coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            walls: Walls::ALL,
            coord: pos,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        self.walls.set(wall, false);
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.walls.get(wall)
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    /// A cell nobody has carved into yet. The generator uses this instead of a visited set.
    pub fn has_all_walls(&self) -> bool {
        self.walls == Walls::ALL
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution_and_offsets_cancel() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
        }
    }

    #[test]
    fn new_cell_is_sealed() {
        let mut cell = Cell::new(Dims(2, 3));
        assert!(cell.has_all_walls());
        assert_eq!(cell.walls(), Walls::ALL);

        cell.remove_wall(CellWall::East);
        assert!(!cell.has_all_walls());
        assert!(cell.is_open(CellWall::East));
        assert!(cell.get_wall(CellWall::West));
        assert_eq!(cell.get_coord(), Dims(2, 3));
    }
}
