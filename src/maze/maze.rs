use smallvec::SmallVec;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::cell::{Cell, CellWall};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Array2D<Cell>,
}

impl Maze {
    /// Creates a maze where every cell is surrounded by walls
    pub fn new(rows: usize, columns: usize) -> Result<Maze, Error> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }

        Ok(Maze {
            cells: Array2D::from_fn(rows, columns, Cell::new),
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.contains(pos)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_in_bounds(cell) && self.is_in_bounds(cell + wall.to_coord())
    }

    /// Returns the wall of `cell` facing `cell2`, if they are adjacent
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .find(|wall| cell + wall.to_coord() == cell2)
    }

    /// In-bounds orthogonal neighbors along with the wall leading to them
    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_valid_wall(cell, wall))
            .map(|wall| (wall, cell + wall.to_coord()))
            .collect()
    }

    /// Neighbors nobody carved into yet
    pub fn unvisited_neighbors(&self, cell: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        self.get_neighbors_pos(cell)
            .into_iter()
            .filter(|&(_, pos)| self.cells[pos].is_fully_walled())
            .collect()
    }

    /// Carves a passage between `cell` and its neighbor behind `wall`.
    ///
    /// A wall belongs to both cells it separates, so both sides are removed together.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> Result<(), Error> {
        if !self.is_in_bounds(cell) {
            return Err(Error::OutOfBounds(cell));
        }
        let neighbor = cell + wall.to_coord();
        if !self.is_in_bounds(neighbor) {
            return Err(Error::OutOfBounds(neighbor));
        }

        self.cells[cell].remove_wall(wall);
        self.cells[neighbor].remove_wall(wall.reverse_wall());

        Ok(())
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// True until the first wall gets removed
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(Cell::is_fully_walled)
    }

    /// Number of removed walls, each shared wall counted once
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [CellWall::South, CellWall::East]
                    .into_iter()
                    .filter(|&wall| {
                        self.is_valid_wall(cell.get_coord(), wall) && !cell.get_wall(wall)
                    })
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellWall::*;

    #[test]
    fn zero_sized_maze_is_rejected() {
        assert_eq!(
            Maze::new(0, 3),
            Err(Error::InvalidDimensions {
                rows: 0,
                columns: 3
            })
        );
        assert!(Maze::new(3, 0).is_err());
    }

    #[test]
    fn fresh_maze() {
        let maze = Maze::new(2, 3).unwrap();
        assert_eq!(maze.size(), Dims(2, 3));
        assert_eq!(maze.cell_count(), 6);
        assert!(maze.is_pristine());
        assert_eq!(maze.passage_count(), 0);
        assert_eq!(maze.get_cell(Dims(1, 2)).unwrap().get_coord(), Dims(1, 2));
        assert!(maze.get_cell(Dims(2, 0)).is_none());
    }

    #[test]
    fn remove_wall_is_symmetric() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Dims(0, 0), East).unwrap();

        assert!(!maze.get_cell(Dims(0, 0)).unwrap().get_wall(East));
        assert!(!maze.get_cell(Dims(0, 1)).unwrap().get_wall(West));
        assert!(maze.get_cell(Dims(1, 0)).unwrap().is_fully_walled());
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn outer_walls_cannot_be_removed() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            maze.remove_wall(Dims(0, 0), North),
            Err(Error::OutOfBounds(Dims(-1, 0)))
        );
        assert_eq!(
            maze.remove_wall(Dims(5, 5), South),
            Err(Error::OutOfBounds(Dims(5, 5)))
        );
        assert!(maze.is_pristine());
    }

    #[test]
    fn neighbors() {
        let maze = Maze::new(3, 3).unwrap();
        let corner = maze.get_neighbors_pos(Dims(0, 0));
        assert_eq!(corner.as_slice(), &[(South, Dims(1, 0)), (East, Dims(0, 1))]);
        assert_eq!(maze.get_neighbors_pos(Dims(1, 1)).len(), 4);

        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(0, 1)), Some(North));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(1, 0)), Some(West));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(2, 2)), None);
    }

    #[test]
    fn visited_neighbors_are_excluded() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_wall(Dims(0, 1), South).unwrap();

        let unvisited = maze.unvisited_neighbors(Dims(0, 0));
        assert_eq!(unvisited.as_slice(), &[(South, Dims(1, 0))]);
    }
}
