use tracing::{debug, info};

use crate::consts::{COMPLETE_PAUSE, LEVEL_CLEAR_PAUSE, PLAY_AREA, START, START_DIRECTION};
use crate::exit::select_exit;
use crate::grid::{Direction, Position};
use crate::level::Level;
use crate::report::RunReport;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Phase {
    Playing,
    /// Exit reached; the board freezes under a banner for `remaining` seconds.
    LevelCleared { remaining: f32 },
    Complete { remaining: f32 },
    Finished,
}

/// Everything that changes while a run is in progress.
pub struct GameState {
    levels: Vec<Level>,
    level: usize,
    snake: Vec<Position>,
    direction: Direction,
    exit: Position,
    phase: Phase,
    report: RunReport,
}

impl GameState {
    /// Starts a run on the first of `levels`, which must not be empty.
    pub fn new(levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "a run needs at least one level");
        let mut state = GameState {
            levels,
            level: 0,
            snake: vec![START],
            direction: START_DIRECTION,
            exit: START,
            phase: Phase::Playing,
            report: RunReport::new(),
        };
        state.enter_level(0);
        state
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.report.seed = Some(seed);
        self
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.level]
    }

    pub fn snake(&self) -> &[Position] {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Turns the snake unless it would double back on itself. Ignored while paused.
    pub fn steer(&mut self, direction: Direction) {
        if self.phase == Phase::Playing && direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// Advances the game by one fixed step of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            Phase::Playing => self.advance_snake(),
            Phase::LevelCleared { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = Phase::LevelCleared { remaining };
                } else if self.level + 1 < self.levels.len() {
                    self.enter_level(self.level + 1);
                } else {
                    info!(
                        collisions = self.report.total_collisions(),
                        "all levels complete"
                    );
                    self.report.completed = true;
                    self.phase = Phase::Complete {
                        remaining: COMPLETE_PAUSE,
                    };
                }
            }
            Phase::Complete { remaining } => {
                let remaining = remaining - dt;
                self.phase = if remaining > 0.0 {
                    Phase::Complete { remaining }
                } else {
                    Phase::Finished
                };
            }
            Phase::Finished => {}
        }
    }

    fn advance_snake(&mut self) {
        let (dx, dy) = self.direction.delta(PLAY_AREA.cell);
        let new_head = self.snake[0].offset(dx, dy);

        if self.current().walls.contains(&new_head) || !PLAY_AREA.contains(new_head) {
            debug!(level = self.level, x = new_head.x, y = new_head.y, "collision, respawning");
            self.report.record_collision();
            self.respawn();
            return;
        }

        self.snake.insert(0, new_head);
        self.snake.pop();
        self.report.record_move();

        if new_head == self.exit {
            info!(level = self.level, "level cleared");
            self.report.clear_level();
            self.phase = Phase::LevelCleared {
                remaining: LEVEL_CLEAR_PAUSE,
            };
        }
    }

    fn respawn(&mut self) {
        self.snake = vec![START];
        self.direction = START_DIRECTION;
    }

    fn enter_level(&mut self, level: usize) {
        self.level = level;
        self.respawn();
        let current = &self.levels[level];
        self.exit = select_exit(&current.walls, START, PLAY_AREA);
        self.phase = Phase::Playing;
        self.report
            .enter_level(level, current.difficulty, current.walls.len(), self.exit);
        info!(
            level = level + 1,
            difficulty = ?current.difficulty,
            walls = current.walls.len(),
            exit_x = self.exit.x,
            exit_y = self.exit.y,
            "entering level"
        );
    }
}
