use crate::grid::{Bounds, Direction, Position};

pub const WIDTH: i16 = 600;
pub const HEIGHT: i16 = 400;
pub const GRID_SIZE: i16 = 20;
pub const GRID_WIDTH: i16 = WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: i16 = HEIGHT / GRID_SIZE;

pub const PLAY_AREA: Bounds = Bounds::new(GRID_WIDTH, GRID_HEIGHT, GRID_SIZE);

pub const START: Position = Position::new(100, 100);
pub const START_DIRECTION: Direction = Direction::Right;

pub const TICKS_PER_SECOND: u32 = 11;
pub const LEVEL_CLEAR_PAUSE: f32 = 1.0;
pub const COMPLETE_PAUSE: f32 = 2.0;

/// Chance that an easy-level wall is knocked out.
pub const EASY_DROP_CHANCE: f64 = 0.3;
/// Extra walls attempted on the hard level, as a share of the raw maze walls.
pub const HARD_EXTRA_RATIO: f64 = 0.2;
