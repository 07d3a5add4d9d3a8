//! Grid-constrained maze chase: a player eats pickups while ghosts wander
//! the maze at random, all advanced by a fixed gameplay tick.

pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod motion;
pub mod pickups;
pub mod player;
pub mod render;

pub use components::{CellPos, Direction, Mover, Position};
pub use error::MazeError;
pub use game::{Game, Outcome};
pub use level::{Cell, MazeGrid};
