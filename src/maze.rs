//! Perfect-maze generation by recursive backtracking.
//!
//! Carving happens on the even lattice of an odd-sized grid: every step jumps
//! two cells and opens the single cell in between, so corridors and lattice
//! cells together form a spanning tree rooted at `(0, 0)`.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

const STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

impl Maze {
    fn filled(cols: usize, rows: usize) -> Self {
        Maze {
            cols,
            rows,
            cells: vec![Cell::Wall; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.cols + x]
    }

    pub fn is_path(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) == Cell::Path
    }

    fn carve(&mut self, x: usize, y: usize) {
        self.cells[y * self.cols + x] = Cell::Path;
    }

    /// Lattice neighbours two cells away that are still solid.
    fn uncarved_neighbours(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        STEPS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < self.cols && ny < self.rows && !self.is_path(nx, ny)).then_some((nx, ny))
            })
            .collect()
    }
}

/// Builds a perfect maze. Even dimensions are silently shrunk by one.
pub fn generate<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> Maze {
    let cols = if cols % 2 == 0 { cols.saturating_sub(1) } else { cols };
    let rows = if rows % 2 == 0 { rows.saturating_sub(1) } else { rows };

    let mut maze = Maze::filled(cols, rows);
    if cols == 0 || rows == 0 {
        return maze;
    }

    maze.carve(0, 0);
    let mut stack = vec![(0usize, 0usize)];

    while let Some(&(cx, cy)) = stack.last() {
        let neighbours = maze.uncarved_neighbours(cx, cy);
        match neighbours.choose(rng) {
            Some(&(nx, ny)) => {
                maze.carve(nx, ny);
                maze.carve((cx + nx) / 2, (cy + ny) / 2);
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }

    maze
}
