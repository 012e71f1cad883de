mod depth_first_search;

use rand::{thread_rng, Rng, SeedableRng as _};

use super::Maze;
use crate::core::*;
pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], drawing a fresh seed when none is given.
///
/// Returns the seed actually used, so the maze can be reproduced later.
pub fn random_from_seed(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Source of the random decisions made while carving.
pub trait Chooser {
    /// Picks an index in `0..len`, `len` is never zero
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

pub trait MazeAlgorithm {
    fn generate_with_progress<C, F>(
        maze: &mut Maze,
        start: Dims,
        chooser: &mut C,
        report_progress: F,
    ) -> Result<(), Error>
    where
        C: Chooser + ?Sized,
        F: FnMut(usize, usize);

    fn generate<C: Chooser + ?Sized>(
        maze: &mut Maze,
        start: Dims,
        chooser: &mut C,
    ) -> Result<(), Error> {
        Self::generate_with_progress(maze, start, chooser, |_, _| {})
    }
}
