mod dims;

pub use dims::Dims;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid dimensions {rows}x{columns}; both sides must be positive")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Dims),
    #[error("Maze has already been carved")]
    AlreadyGenerated,
    #[error("Node {0} is a wall")]
    NodeIsWall(Dims),
    #[error("Node {0} is occupied by the start or the end")]
    NodeOccupied(Dims),
    #[error("Start and end must both be placed before searching")]
    MissingEndpoint,
    #[error("Rows of the grid have different lengths")]
    RaggedRows,
}
