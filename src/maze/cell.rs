use crate::core::*;
use crate::maze::cell::CellWall::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
            coord: pos,
        }
    }

    /// Removes only this cell's side of the wall, use [`Maze::remove_wall`] to keep
    /// both sides consistent.
    ///
    /// [`Maze::remove_wall`]: crate::maze::Maze::remove_wall
    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            North => self.north = false,
            South => self.south = false,
            East => self.east = false,
            West => self.west = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            North => self.north,
            South => self.south,
            East => self.east,
            West => self.west,
        }
    }

    /// Walls still standing, in [`CellWall::get_in_order`] order
    pub fn walls(&self) -> Vec<CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.get_wall(wall))
            .collect()
    }

    /// A cell nobody carved into yet
    pub fn is_fully_walled(&self) -> bool {
        self.north && self.south && self.east && self.west
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellWall {
    North,
    South,
    East,
    West,
}

impl CellWall {
    pub fn to_coord(&self) -> Dims {
        match self {
            North => Dims(-1, 0),
            South => Dims(1, 0),
            East => Dims(0, 1),
            West => Dims(0, -1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [North, South, East, West]
    }
}
