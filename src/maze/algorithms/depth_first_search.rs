use super::{Chooser, Maze, MazeAlgorithm};
use crate::core::*;

/// Randomized depth-first carving (recursive backtracker), iterative with an explicit stack.
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn generate_with_progress<C, F>(
        maze: &mut Maze,
        start: Dims,
        chooser: &mut C,
        mut report_progress: F,
    ) -> Result<(), Error>
    where
        C: Chooser + ?Sized,
        F: FnMut(usize, usize),
    {
        if !maze.is_in_bounds(start) {
            return Err(Error::OutOfBounds(start));
        }
        if !maze.is_pristine() {
            return Err(Error::AlreadyGenerated);
        }

        let cell_count = maze.cell_count();
        log::debug!(
            "Carving {}x{} maze from {}",
            maze.rows(),
            maze.columns(),
            start
        );

        let mut stack: Vec<Dims> = Vec::with_capacity(cell_count);
        let mut current = start;
        let mut visited = 1;
        report_progress(visited, cell_count);

        while visited < cell_count {
            let unvisited_neighbors = maze.unvisited_neighbors(current);

            if unvisited_neighbors.is_empty() {
                // stack can't run dry while unvisited cells remain in a connected grid
                let Some(previous) = stack.pop() else {
                    break;
                };
                current = previous;
                continue;
            }

            let chosen = chooser.choose_index(unvisited_neighbors.len()) % unvisited_neighbors.len();
            let (wall, next) = unvisited_neighbors[chosen];
            maze.remove_wall(current, wall)?;
            stack.push(current);
            current = next;
            visited += 1;

            report_progress(visited, cell_count);
        }

        log::debug!("Maze carved, {} passages", maze.passage_count());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng as _;

    use super::*;
    use crate::maze::algorithms::Random;
    use crate::maze::CellWall::{self, *};

    /// Always takes the first candidate
    struct FirstChoice;

    impl Chooser for FirstChoice {
        fn choose_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn generated(rows: usize, columns: usize, start: Dims, seed: u64) -> Maze {
        let mut maze = Maze::new(rows, columns).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        DepthFirstSearch::generate(&mut maze, start, &mut rng).unwrap();
        maze
    }

    fn reachable_from(maze: &Maze, from: Dims) -> usize {
        let mut seen = hashbrown::HashSet::new();
        let mut queue = VecDeque::from([from]);
        seen.insert(from);

        while let Some(pos) = queue.pop_front() {
            let cell = maze.get_cell(pos).unwrap();
            for (wall, neighbor) in maze.get_neighbors_pos(pos) {
                if !cell.get_wall(wall) && seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        seen.len()
    }

    #[test]
    fn scripted_carve_matches_fixture() {
        let mut maze = Maze::new(3, 3).unwrap();
        DepthFirstSearch::generate(&mut maze, Dims(0, 0), &mut FirstChoice).unwrap();

        let expected: [(Dims, &[CellWall]); 9] = [
            (Dims(0, 0), &[North, East, West]),
            (Dims(0, 1), &[North, West]),
            (Dims(0, 2), &[North, East]),
            (Dims(1, 0), &[East, West]),
            (Dims(1, 1), &[East, West]),
            (Dims(1, 2), &[East, West]),
            (Dims(2, 0), &[South, West]),
            (Dims(2, 1), &[South, East]),
            (Dims(2, 2), &[South, East, West]),
        ];

        for (pos, walls) in expected {
            assert_eq!(maze.get_cell(pos).unwrap().walls(), walls, "cell {}", pos);
        }
    }

    #[test]
    fn generated_maze_is_spanning_tree() {
        for (rows, columns, seed) in [(1, 1, 0), (1, 7, 1), (6, 1, 2), (5, 5, 3), (12, 9, 4)] {
            let maze = generated(rows, columns, Dims(0, 0), seed);

            assert_eq!(maze.passage_count(), rows * columns - 1);
            assert!(maze.get_cells().iter().all(|c| !c.is_fully_walled()) || rows * columns == 1);
            for pos in [Dims(0, 0), Dims(rows as i32 - 1, columns as i32 - 1)] {
                assert_eq!(reachable_from(&maze, pos), rows * columns);
            }
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let maze = generated(8, 11, Dims(4, 5), 7);

        for cell in maze.get_cells().iter() {
            for (wall, neighbor) in maze.get_neighbors_pos(cell.get_coord()) {
                let other = maze.get_cell(neighbor).unwrap();
                assert_eq!(cell.get_wall(wall), other.get_wall(wall.reverse_wall()));
            }
        }
    }

    #[test]
    fn outer_border_stays_closed() {
        let maze = generated(6, 4, Dims(2, 2), 11);

        for cell in maze.get_cells().iter() {
            for wall in CellWall::get_in_order() {
                if !maze.is_valid_wall(cell.get_coord(), wall) {
                    assert!(cell.get_wall(wall));
                }
            }
        }
    }

    #[test]
    fn seeded_carve_matches_fixture() {
        let maze = generated(3, 3, Dims(0, 0), 42);

        let expected: [(Dims, &[CellWall]); 9] = [
            (Dims(0, 0), &[North, East, West]),
            (Dims(0, 1), &[North, South, West]),
            (Dims(0, 2), &[North, East]),
            (Dims(1, 0), &[South, West]),
            (Dims(1, 1), &[North, South]),
            (Dims(1, 2), &[East]),
            (Dims(2, 0), &[North, South, West]),
            (Dims(2, 1), &[North, South]),
            (Dims(2, 2), &[South, East]),
        ];

        for (pos, walls) in expected {
            assert_eq!(maze.get_cell(pos).unwrap().walls(), walls, "cell {}", pos);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let first = generated(3, 3, Dims(0, 0), 42);
        let second = generated(3, 3, Dims(0, 0), 42);
        assert_eq!(first, second);

        let big_first = generated(20, 30, Dims(3, 7), 42);
        let big_second = generated(20, 30, Dims(3, 7), 42);
        assert_eq!(big_first, big_second);
    }

    #[test]
    fn start_out_of_bounds() {
        let mut maze = Maze::new(3, 3).unwrap();
        let mut rng = Random::seed_from_u64(0);

        assert_eq!(
            DepthFirstSearch::generate(&mut maze, Dims(3, 0), &mut rng),
            Err(Error::OutOfBounds(Dims(3, 0)))
        );
        assert_eq!(
            DepthFirstSearch::generate(&mut maze, Dims(0, -1), &mut rng),
            Err(Error::OutOfBounds(Dims(0, -1)))
        );
        assert!(maze.is_pristine());
    }

    #[test]
    fn carved_maze_is_not_generated_again() {
        let mut maze = generated(4, 4, Dims(0, 0), 5);
        let mut rng = Random::seed_from_u64(5);

        assert_eq!(
            DepthFirstSearch::generate(&mut maze, Dims(0, 0), &mut rng),
            Err(Error::AlreadyGenerated)
        );
    }

    #[test]
    fn progress_is_reported() {
        let mut maze = Maze::new(4, 5).unwrap();
        let mut reports = Vec::new();

        DepthFirstSearch::generate_with_progress(
            &mut maze,
            Dims(1, 1),
            &mut FirstChoice,
            |done, total| reports.push((done, total)),
        )
        .unwrap();

        assert_eq!(reports.len(), 20);
        assert_eq!(reports.first(), Some(&(1, 20)));
        assert_eq!(reports.last(), Some(&(20, 20)));
    }
}
