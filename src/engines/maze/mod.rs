pub mod generator;
pub mod grid;
pub mod pathfinder;

pub use generator::{generate, MazeGenerator, MIN_DIMENSION};
pub use grid::Grid;
pub use pathfinder::{distances_from, shortest_path, Path};
