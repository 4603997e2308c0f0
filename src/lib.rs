//! Snake through a procedurally generated maze drawn as a circuit board.

pub mod consts;
pub mod exit;
pub mod game;
pub mod grid;
pub mod level;
pub mod maze;
pub mod render;
pub mod report;
pub mod settings;

pub use exit::select_exit;
pub use game::{GameState, Phase};
pub use grid::{Bounds, Direction, Position};
pub use level::{build_levels, maze_walls, shape_walls, Difficulty, Level, Walls};
pub use settings::Settings;
