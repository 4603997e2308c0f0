use std::collections::HashSet;

use ggez::graphics::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{EASY_DROP_CHANCE, HARD_EXTRA_RATIO};
use crate::grid::{Bounds, Position};
use crate::maze;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Visual and obstacle parameters of one difficulty.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LevelStyle {
    pub trace: Color,
    pub background: Color,
    pub diagonals: bool,
    pub components: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn style(&self) -> LevelStyle {
        match self {
            Difficulty::Easy => LevelStyle {
                trace: Color::new(0.0, 1.0, 0.0, 1.0),
                background: Color::new(0.0, 50.0 / 255.0, 0.0, 1.0),
                diagonals: false,
                components: 3,
            },
            Difficulty::Medium => LevelStyle {
                trace: Color::new(0.0, 0.0, 1.0, 1.0),
                background: Color::new(0.0, 0.0, 50.0 / 255.0, 1.0),
                diagonals: true,
                components: 6,
            },
            Difficulty::Hard => LevelStyle {
                trace: Color::new(1.0, 0.0, 0.0, 1.0),
                background: Color::new(50.0 / 255.0, 0.0, 0.0, 1.0),
                diagonals: true,
                components: 10,
            },
        }
    }
}

/// Wall cells in insertion order, with set lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walls {
    order: Vec<Position>,
    members: HashSet<Position>,
}

impl Walls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the list untouched, if `pos` is already a wall.
    pub fn insert(&mut self, pos: Position) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        self.order.push(pos);
        true
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.order
    }
}

impl FromIterator<Position> for Walls {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut walls = Walls::new();
        for pos in iter {
            walls.insert(pos);
        }
        walls
    }
}

/// Carves a maze over the largest odd sub-grid of `bounds` and returns its
/// walls in pixel space, centred in the full grid.
pub fn maze_walls<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Walls {
    let maze_cols = if bounds.cols % 2 == 1 { bounds.cols } else { bounds.cols - 1 };
    let maze_rows = if bounds.rows % 2 == 1 { bounds.rows } else { bounds.rows - 1 };
    let maze = maze::generate(maze_cols.max(0) as usize, maze_rows.max(0) as usize, rng);

    let offset_x = ((bounds.cols - maze_cols) / 2) * bounds.cell;
    let offset_y = ((bounds.rows - maze_rows) / 2) * bounds.cell;

    let mut walls = Walls::new();
    for j in 0..maze.rows() {
        for i in 0..maze.cols() {
            if !maze.is_path(i, j) {
                walls.insert(Position::new(
                    i as i16 * bounds.cell + offset_x,
                    j as i16 * bounds.cell + offset_y,
                ));
            }
        }
    }
    walls
}

/// Raw maze walls, perturbed for the given difficulty.
///
/// Easy knocks out each wall independently, Medium keeps the perfect maze, and
/// Hard scatters extra obstacles over the whole grid. A hard draw that lands
/// on an existing wall is dropped, not redrawn.
pub fn shape_walls<R: Rng + ?Sized>(bounds: Bounds, difficulty: Difficulty, rng: &mut R) -> Walls {
    let base = maze_walls(bounds, rng);
    match difficulty {
        Difficulty::Easy => base
            .iter()
            .copied()
            .filter(|_| rng.gen::<f64>() > EASY_DROP_CHANCE)
            .collect(),
        Difficulty::Medium => base,
        Difficulty::Hard => {
            let additional = (base.len() as f64 * HARD_EXTRA_RATIO) as usize;
            let mut walls = base;
            for _ in 0..additional {
                let x = rng.gen_range(0..bounds.cols) * bounds.cell;
                let y = rng.gen_range(0..bounds.rows) * bounds.cell;
                walls.insert(Position::new(x, y));
            }
            walls
        }
    }
}

/// A wire between two neighbouring wall cells, stored by cell corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Trace {
    pub from: Position,
    pub to: Position,
}

/// Connects every pair of adjacent walls exactly once.
pub fn traces(walls: &Walls, diagonals: bool, cell: i16) -> Vec<Trace> {
    let mut steps = vec![(cell, 0), (-cell, 0), (0, cell), (0, -cell)];
    if diagonals {
        steps.extend([(cell, cell), (-cell, -cell), (cell, -cell), (-cell, cell)]);
    }

    let mut drawn = HashSet::new();
    let mut traces = Vec::new();
    for &wall in walls.iter() {
        for &(dx, dy) in &steps {
            let neighbour = wall.offset(dx, dy);
            if !walls.contains(&neighbour) {
                continue;
            }
            let key = (wall.min(neighbour), wall.max(neighbour));
            if drawn.insert(key) {
                traces.push(Trace {
                    from: wall,
                    to: neighbour,
                });
            }
        }
    }
    traces
}

/// Immutable description of one level, built once at startup.
#[derive(Clone, Debug)]
pub struct Level {
    pub difficulty: Difficulty,
    pub walls: Walls,
    pub style: LevelStyle,
    pub traces: Vec<Trace>,
    /// Wall cells decorated with a chip footprint.
    pub components: Vec<Position>,
}

impl Level {
    pub fn new<R: Rng + ?Sized>(walls: Walls, difficulty: Difficulty, cell: i16, rng: &mut R) -> Self {
        let style = difficulty.style();
        let traces = traces(&walls, style.diagonals, cell);
        let components = walls
            .as_slice()
            .choose_multiple(rng, style.components)
            .copied()
            .collect();
        Level {
            difficulty,
            walls,
            style,
            traces,
            components,
        }
    }
}

pub fn build_levels<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Vec<Level> {
    Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let walls = shape_walls(bounds, difficulty, rng);
            let level = Level::new(walls, difficulty, bounds.cell, rng);
            debug!(
                ?difficulty,
                walls = level.walls.len(),
                traces = level.traces.len(),
                "built level"
            );
            level
        })
        .collect()
}
