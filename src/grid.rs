use serde::{Deserialize, Serialize};

/// Top-left pixel corner of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance_sq(self, other: Position) -> i32 {
        let dx = (self.x - other.x) as i32;
        let dy = (self.y - other.y) as i32;
        dx * dx + dy * dy
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Pixel step for one move on a grid of `cell`-sized squares.
    pub fn delta(self, cell: i16) -> (i16, i16) {
        match self {
            Direction::Up => (0, -cell),
            Direction::Down => (0, cell),
            Direction::Left => (-cell, 0),
            Direction::Right => (cell, 0),
        }
    }
}

/// A rectangular play area measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub cols: i16,
    pub rows: i16,
    pub cell: i16,
}

impl Bounds {
    pub const fn new(cols: i16, rows: i16, cell: i16) -> Self {
        Bounds { cols, rows, cell }
    }

    pub fn width(&self) -> i16 {
        self.cols * self.cell
    }

    pub fn height(&self) -> i16 {
        self.rows * self.cell
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width() && pos.y >= 0 && pos.y < self.height()
    }

    /// Every cell corner, x outer and y inner.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Bounds { cols, rows, cell } = *self;
        (0..cols).flat_map(move |i| (0..rows).map(move |j| Position::new(i * cell, j * cell)))
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.width() - self.cell, self.height() - self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_column_major() {
        let bounds = Bounds::new(2, 3, 20);
        let cells: Vec<_> = bounds.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[1], Position::new(0, 20));
        assert_eq!(cells[3], Position::new(20, 0));
        assert_eq!(bounds.bottom_right(), Position::new(20, 40));
    }

    #[test]
    fn contains_rejects_borders() {
        let bounds = Bounds::new(30, 20, 20);
        assert!(bounds.contains(Position::new(580, 380)));
        assert!(!bounds.contains(Position::new(600, 0)));
        assert!(!bounds.contains(Position::new(0, -20)));
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta(20);
            let (ox, oy) = dir.opposite().delta(20);
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
