use crate::grid::{Bounds, Position};
use crate::level::Walls;

/// Picks the free cell farthest from `start`, first one wins on ties.
///
/// Falls back to the bottom-right cell when every cell is a wall. The chosen
/// cell is not guaranteed to be reachable from `start`.
pub fn select_exit(walls: &Walls, start: Position, bounds: Bounds) -> Position {
    let mut best: Option<(i32, Position)> = None;
    for cell in bounds.cells().filter(|c| !walls.contains(c)) {
        let distance = cell.distance_sq(start);
        if best.map_or(true, |(d, _)| distance > d) {
            best = Some((distance, cell));
        }
    }
    best.map_or_else(|| bounds.bottom_right(), |(_, cell)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Position = Position::new(100, 100);

    #[test]
    fn open_board_picks_far_corner() {
        let bounds = Bounds::new(30, 20, 20);
        assert_eq!(
            select_exit(&Walls::new(), START, bounds),
            Position::new(580, 380)
        );
    }

    #[test]
    fn walled_corner_moves_exit() {
        let bounds = Bounds::new(30, 20, 20);
        let walls: Walls = [Position::new(580, 380)].into_iter().collect();
        let exit = select_exit(&walls, START, bounds);
        assert_ne!(exit, Position::new(580, 380));
        // 480² + 260² beats 460² + 280²
        assert_eq!(exit, Position::new(580, 360));
    }

    #[test]
    fn full_board_falls_back() {
        let bounds = Bounds::new(3, 2, 20);
        let walls: Walls = bounds.cells().collect();
        assert_eq!(select_exit(&walls, START, bounds), Position::new(40, 20));
    }

    #[test]
    fn ties_keep_first_in_scan_order() {
        // (0, 0) and (40, 0) are equally far from (20, 0); x is scanned first
        let bounds = Bounds::new(3, 1, 20);
        let exit = select_exit(&Walls::new(), Position::new(20, 0), bounds);
        assert_eq!(exit, Position::new(0, 0));
    }
}
