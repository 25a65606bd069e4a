pub mod config;
pub mod error;
pub mod game;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use generators::{generate, generate_maze};
pub use maze::{Cell, Coord, Direction, Maze};
pub use solvers::{Solution, solve};
