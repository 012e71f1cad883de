use std::fmt;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::{CellWall, Maze};

/// Obstacle grid, `true` is a wall.
///
/// A maze of `rows x columns` cells projects onto `(2*rows + 1) x (2*columns + 1)`
/// sub-cells: each cell owns its interior, the sub-cells south and east of it and
/// the corner between them, and the border frames everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassabilityMatrix(Array2D<bool>);

impl PassabilityMatrix {
    pub fn from_maze(maze: &Maze) -> Self {
        let mut matrix = Array2D::new(true, 2 * maze.rows() + 1, 2 * maze.columns() + 1);

        for cell in maze.get_cells().iter() {
            let Dims(x, y) = cell.get_coord();
            let interior = Dims(2 * x + 1, 2 * y + 1);

            matrix[interior] = false;
            if !cell.get_wall(CellWall::South) {
                matrix[interior + CellWall::South.to_coord()] = false;
            }
            if !cell.get_wall(CellWall::East) {
                matrix[interior + CellWall::East.to_coord()] = false;
            }
        }

        Self(matrix)
    }

    /// Builds a hand-made grid, every row must have the same length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimensions {
                rows: height,
                columns: width,
            });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::RaggedRows);
        }

        Ok(Self(Array2D::from_fn(height, width, |Dims(x, y)| {
            rows[x as usize][y as usize]
        })))
    }

    pub fn size(&self) -> Dims {
        self.0.size()
    }

    pub fn rows(&self) -> usize {
        self.0.rows()
    }

    pub fn columns(&self) -> usize {
        self.0.columns()
    }

    /// Out of bounds counts as a wall
    pub fn is_wall(&self, pos: Dims) -> bool {
        self.0.get(pos).copied().unwrap_or(true)
    }

    pub fn get(&self, pos: Dims) -> Option<bool> {
        self.0.get(pos).copied()
    }

    pub fn as_array(&self) -> &Array2D<bool> {
        &self.0
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .filter_map(|x| self.0.row(x).map(<[bool]>::to_vec))
            .collect()
    }
}

impl From<&Maze> for PassabilityMatrix {
    fn from(maze: &Maze) -> Self {
        Self::from_maze(maze)
    }
}

impl fmt::Display for PassabilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.rows() {
            let row = self.0.row(x).unwrap_or_default();
            for &wall in row {
                f.write_str(if wall { "██" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn parse_ascii(art: &str) -> PassabilityMatrix {
    let rows = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '#').collect())
        .collect();
    PassabilityMatrix::from_rows(rows).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::algorithms::{DepthFirstSearch, MazeAlgorithm as _, Random};
    use rand::SeedableRng as _;

    #[test]
    fn single_cell() {
        let maze = Maze::new(1, 1).unwrap();
        let matrix = PassabilityMatrix::from_maze(&maze);

        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![true, true, true],
                vec![true, false, true],
                vec![true, true, true],
            ]
        );
    }

    #[test]
    fn generated_sizes() {
        for (rows, columns) in [(1, 4), (3, 3), (7, 2), (10, 13)] {
            let mut maze = Maze::new(rows, columns).unwrap();
            let mut rng = Random::seed_from_u64(rows as u64 * 31 + columns as u64);
            DepthFirstSearch::generate(&mut maze, Dims(0, 0), &mut rng).unwrap();

            let matrix = PassabilityMatrix::from_maze(&maze);
            assert_eq!(matrix.size(), Dims(2 * rows as i32 + 1, 2 * columns as i32 + 1));

            // border stays closed
            for x in 0..matrix.rows() as i32 {
                assert!(matrix.is_wall(Dims(x, 0)));
                assert!(matrix.is_wall(Dims(x, matrix.columns() as i32 - 1)));
            }
            for y in 0..matrix.columns() as i32 {
                assert!(matrix.is_wall(Dims(0, y)));
                assert!(matrix.is_wall(Dims(matrix.rows() as i32 - 1, y)));
            }

            // a perfect maze opens every interior plus one boundary per passage
            let open = matrix.as_array().iter().filter(|&&w| !w).count();
            assert_eq!(open, rows * columns + maze.passage_count());
        }
    }

    #[test]
    fn carved_layout() {
        // serpentine carved by always taking the first free neighbor
        let mut maze = Maze::new(3, 3).unwrap();
        for (cell, wall) in [
            (Dims(0, 0), CellWall::South),
            (Dims(1, 0), CellWall::South),
            (Dims(2, 0), CellWall::East),
            (Dims(2, 1), CellWall::North),
            (Dims(1, 1), CellWall::North),
            (Dims(0, 1), CellWall::East),
            (Dims(0, 2), CellWall::South),
            (Dims(1, 2), CellWall::South),
        ] {
            maze.remove_wall(cell, wall).unwrap();
        }

        let expected = parse_ascii(
            "
            #######
            #.#...#
            #.#.#.#
            #.#.#.#
            #.#.#.#
            #...#.#
            #######
            ",
        );
        assert_eq!(PassabilityMatrix::from_maze(&maze), expected);
    }

    #[test]
    fn from_rows_validation() {
        assert_eq!(
            PassabilityMatrix::from_rows(vec![]),
            Err(Error::InvalidDimensions {
                rows: 0,
                columns: 0
            })
        );
        assert_eq!(
            PassabilityMatrix::from_rows(vec![vec![true, false], vec![true]]),
            Err(Error::RaggedRows)
        );
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let matrix = parse_ascii("...");
        assert!(!matrix.is_wall(Dims(0, 2)));
        assert!(matrix.is_wall(Dims(0, 3)));
        assert!(matrix.is_wall(Dims(-1, 0)));
        assert_eq!(matrix.get(Dims(1, 0)), None);
    }

    #[test]
    fn glyphs() {
        let matrix = parse_ascii("#.\n.#");
        assert_eq!(matrix.to_string(), "██  \n  ██\n");
    }
}
