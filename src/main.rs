use ggez::event::{self, EventHandler};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameResult};
use tracing::{error, info};

use circuit_snake::consts::{HEIGHT, PLAY_AREA, WIDTH};
use circuit_snake::{build_levels, render, Direction, GameState, Phase, Settings};

struct Game {
    state: GameState,
    ticks_per_second: u32,
    reported: bool,
}

impl Game {
    fn new(state: GameState, ticks_per_second: u32) -> Self {
        Game {
            state,
            ticks_per_second,
            reported: false,
        }
    }

    fn log_report(&mut self) {
        if self.reported {
            return;
        }
        self.reported = true;
        match self.state.report().to_json() {
            Ok(json) => info!("run report\n{}", json),
            Err(e) => error!("failed to serialize run report: {}", e),
        }
    }
}

impl EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = 1.0 / self.ticks_per_second as f32;
        while ctx.time.check_update_time(self.ticks_per_second) {
            self.state.tick(dt);
        }

        if self.state.phase() == Phase::Finished {
            self.log_report();
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::draw(ctx, &self.state)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        let direction = match input.keycode {
            Some(KeyCode::Up) => Direction::Up,
            Some(KeyCode::Down) => Direction::Down,
            Some(KeyCode::Left) => Direction::Left,
            Some(KeyCode::Right) => Direction::Right,
            _ => return Ok(()),
        };
        self.state.steer(direction);
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        self.log_report();
        Ok(false)
    }
}

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = Settings::from_env();
    info!(
        seed = settings.seed,
        ticks_per_second = settings.ticks_per_second,
        "starting circuit snake"
    );

    let mut rng = settings.rng();
    let levels = build_levels(PLAY_AREA, &mut rng);
    let state = GameState::new(levels).with_seed(settings.seed);

    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake with Maze-like Circuit Board")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(WIDTH as f32, HEIGHT as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("circuit_snake", "circuit_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let game = Game::new(state, settings.ticks_per_second);
    event::run(ctx, event_loop, game)
}
