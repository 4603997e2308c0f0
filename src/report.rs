//! In-memory statistics for one play session, logged as JSON when the run ends.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::grid::Position;
use crate::level::Difficulty;

#[derive(Serialize, Clone, Debug)]
pub struct LevelRecord {
    pub level: usize,
    pub difficulty: Difficulty,
    pub walls: usize,
    pub exit: Position,
    pub moves: u32,
    pub collisions: u32,
    pub entered_at: DateTime<Local>,
    pub cleared_at: Option<DateTime<Local>>,
}

#[derive(Serialize, Clone, Debug)]
pub struct RunReport {
    pub seed: Option<u64>,
    pub started_at: DateTime<Local>,
    pub levels: Vec<LevelRecord>,
    pub completed: bool,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    pub fn new() -> Self {
        RunReport {
            seed: None,
            started_at: Local::now(),
            levels: Vec::new(),
            completed: false,
        }
    }

    pub fn enter_level(&mut self, level: usize, difficulty: Difficulty, walls: usize, exit: Position) {
        self.levels.push(LevelRecord {
            level,
            difficulty,
            walls,
            exit,
            moves: 0,
            collisions: 0,
            entered_at: Local::now(),
            cleared_at: None,
        });
    }

    pub fn record_move(&mut self) {
        if let Some(record) = self.levels.last_mut() {
            record.moves += 1;
        }
    }

    pub fn record_collision(&mut self) {
        if let Some(record) = self.levels.last_mut() {
            record.collisions += 1;
        }
    }

    pub fn clear_level(&mut self) {
        if let Some(record) = self.levels.last_mut() {
            record.cleared_at = Some(Local::now());
        }
    }

    pub fn total_collisions(&self) -> u32 {
        self.levels.iter().map(|r| r.collisions).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
