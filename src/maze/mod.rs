pub mod maze;
pub use maze::Maze;
pub mod cell;
pub use cell::{Cell, CellWall};

pub mod algorithms;
pub mod export;
