pub mod array;
pub mod core;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod pathfinder;
pub mod settings;
