use std::collections::HashSet;

use circuit_snake::consts::{HARD_EXTRA_RATIO, PLAY_AREA, START};
use circuit_snake::{
    build_levels, maze_walls, select_exit, shape_walls, Bounds, Difficulty, Position, Walls,
};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn medium_is_the_raw_maze() {
    for seed in 0..5 {
        let raw = maze_walls(PLAY_AREA, &mut seeded(seed));
        let medium = shape_walls(PLAY_AREA, Difficulty::Medium, &mut seeded(seed));
        assert_eq!(raw.as_slice(), medium.as_slice());
    }
}

#[test]
fn easy_is_a_thinned_subset() {
    let mut kept = 0;
    let mut total = 0;
    for seed in 0..20 {
        let raw = maze_walls(PLAY_AREA, &mut seeded(seed));
        let easy = shape_walls(PLAY_AREA, Difficulty::Easy, &mut seeded(seed));
        assert!(easy.iter().all(|w| raw.contains(w)));
        assert!(easy.len() <= raw.len());
        kept += easy.len();
        total += raw.len();
    }
    let ratio = kept as f64 / total as f64;
    assert!((ratio - 0.7).abs() < 0.05, "retained {ratio}");
}

#[test]
fn easy_preserves_raw_order() {
    let raw = maze_walls(PLAY_AREA, &mut seeded(4));
    let easy = shape_walls(PLAY_AREA, Difficulty::Easy, &mut seeded(4));
    let mut cursor = raw.iter();
    for wall in easy.iter() {
        assert!(cursor.any(|r| r == wall), "easy walls keep raw order");
    }
}

#[test]
fn hard_adds_at_most_a_fifth() {
    for seed in 0..10 {
        let raw = maze_walls(PLAY_AREA, &mut seeded(seed));
        let hard = shape_walls(PLAY_AREA, Difficulty::Hard, &mut seeded(seed));

        assert_eq!(&hard.as_slice()[..raw.len()], raw.as_slice());
        let unique: HashSet<_> = hard.iter().collect();
        assert_eq!(unique.len(), hard.len(), "no duplicate walls");

        let budget = (raw.len() as f64 * HARD_EXTRA_RATIO) as usize;
        assert!(hard.len() > raw.len());
        assert!(hard.len() - raw.len() <= budget);
        assert!(hard.iter().all(|w| PLAY_AREA.contains(*w)));
    }
}

#[test]
fn exit_is_never_a_wall() {
    for seed in 0..5 {
        for level in build_levels(PLAY_AREA, &mut seeded(seed)) {
            let exit = select_exit(&level.walls, START, PLAY_AREA);
            assert!(!level.walls.contains(&exit));
            assert!(PLAY_AREA.contains(exit));
        }
    }
}

#[test]
fn exit_falls_back_on_solid_board() {
    let walls: Walls = PLAY_AREA.cells().collect();
    assert_eq!(
        select_exit(&walls, START, PLAY_AREA),
        Position::new(580, 380)
    );
}

#[test]
fn three_by_three_board_with_fixed_rng() {
    let bounds = Bounds::new(3, 3, 20);
    let walls = maze_walls(bounds, &mut StepRng::new(0, 0));
    assert_eq!(
        walls.as_slice(),
        &[Position::new(0, 20), Position::new(20, 20)]
    );
    assert_eq!(select_exit(&walls, START, bounds), Position::new(0, 0));
}

#[test]
fn three_by_three_board_with_any_seed() {
    let bounds = Bounds::new(3, 3, 20);
    let corridors = [(20, 0), (0, 20), (40, 20), (20, 40)];
    for seed in 0..10 {
        let walls = maze_walls(bounds, &mut seeded(seed));
        // the centre plus exactly one uncut corridor
        assert_eq!(walls.len(), 2);
        assert!(walls.contains(&Position::new(20, 20)));
        assert!(corridors
            .iter()
            .any(|&(x, y)| walls.contains(&Position::new(x, y))));
        // (0, 0) is always carved and is the farthest cell from (100, 100)
        assert_eq!(select_exit(&walls, START, bounds), Position::new(0, 0));
    }
}

#[test]
fn levels_are_reproducible_from_a_seed() {
    let a = build_levels(PLAY_AREA, &mut seeded(2024));
    let b = build_levels(PLAY_AREA, &mut seeded(2024));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.walls, y.walls);
        assert_eq!(x.components, y.components);
        assert_eq!(x.traces, y.traces);
    }
}
