//! Two escape-pod puzzles: the shortest route through a maze when one wall may be removed,
//! and the number of staircases that can be built from a pile of bricks.

pub mod draw;
pub mod error;
pub mod maze;
pub mod staircase;

pub use error::InvalidInput;
pub use maze::solve_maze;
pub use staircase::count_staircases;
