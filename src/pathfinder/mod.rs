mod astar;
pub mod node;

pub use astar::{find_path, AStar, PathResult, SearchStatus};
pub use node::{Node, NodeGrid, NodeState};
