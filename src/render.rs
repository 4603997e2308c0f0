//! Draws the circuit board, the snake and the banners with ggez primitives.

use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::consts::{GRID_SIZE, HEIGHT, WIDTH};
use crate::game::{GameState, Phase};
use crate::grid::Position;
use crate::level::Level;

const GRID_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);
const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const EXIT_COLOR: Color = Color::WHITE;
const SOLDER_RADIUS: f32 = 4.0;
const TRACE_WIDTH: f32 = 3.0;
const COMPONENT_INSET: f32 = 5.0;
const COMPONENT_SIZE: f32 = 10.0;
const TEXT_SCALE: f32 = 32.0;

fn point(x: f32, y: f32) -> Point2<f32> {
    Point2 { x, y }
}

fn center(pos: Position) -> Point2<f32> {
    point(
        (pos.x + GRID_SIZE / 2) as f32,
        (pos.y + GRID_SIZE / 2) as f32,
    )
}

fn cell_rect(pos: Position) -> Rect {
    Rect::new(pos.x as f32, pos.y as f32, GRID_SIZE as f32, GRID_SIZE as f32)
}

fn build_board(mb: &mut MeshBuilder, level: &Level) -> GameResult {
    let (width, height) = (WIDTH as f32, HEIGHT as f32);
    for x in (0..WIDTH).step_by(GRID_SIZE as usize) {
        let x = x as f32;
        mb.line(&[point(x, 0.0), point(x, height)], 1.0, GRID_COLOR)?;
    }
    for y in (0..HEIGHT).step_by(GRID_SIZE as usize) {
        let y = y as f32;
        mb.line(&[point(0.0, y), point(width, y)], 1.0, GRID_COLOR)?;
    }

    let color = level.style.trace;
    for wall in level.walls.iter() {
        mb.circle(DrawMode::fill(), center(*wall), SOLDER_RADIUS, 0.5, color)?;
    }
    for trace in &level.traces {
        mb.line(&[center(trace.from), center(trace.to)], TRACE_WIDTH, color)?;
    }
    for spot in &level.components {
        let rect = Rect::new(
            spot.x as f32 + COMPONENT_INSET,
            spot.y as f32 + COMPONENT_INSET,
            COMPONENT_SIZE,
            COMPONENT_SIZE,
        );
        mb.rectangle(DrawMode::fill(), rect, color)?;
    }
    Ok(())
}

fn draw_banner(canvas: &mut Canvas, message: &str, dest: Point2<f32>, color: Color) {
    let mut text = Text::new(message);
    text.set_scale(TEXT_SCALE);
    canvas.draw(&text, DrawParam::default().dest(dest).color(color));
}

pub fn draw(ctx: &mut Context, state: &GameState) -> GameResult {
    let level = state.current();
    let mut canvas = Canvas::from_frame(ctx, level.style.background);

    let mut mb = MeshBuilder::new();
    build_board(&mut mb, level)?;
    for segment in state.snake() {
        mb.rectangle(DrawMode::fill(), cell_rect(*segment), SNAKE_COLOR)?;
    }
    mb.rectangle(DrawMode::fill(), cell_rect(state.exit()), EXIT_COLOR)?;
    let board = Mesh::from_data(ctx, mb.build());
    canvas.draw(&board, DrawParam::default());

    draw_banner(
        &mut canvas,
        &format!("Level {}", state.level() + 1),
        point(10.0, 10.0),
        Color::WHITE,
    );

    let middle = HEIGHT as f32 / 2.0;
    match state.phase() {
        Phase::LevelCleared { .. } => draw_banner(
            &mut canvas,
            "Hacked!",
            point(WIDTH as f32 / 2.0 - 50.0, middle),
            level.style.trace,
        ),
        Phase::Complete { .. } | Phase::Finished => draw_banner(
            &mut canvas,
            "All levels complete!",
            point(WIDTH as f32 / 2.0 - 100.0, middle),
            Color::WHITE,
        ),
        Phase::Playing => {}
    }

    canvas.finish(ctx)?;
    Ok(())
}
