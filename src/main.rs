use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use gridsnake::config::{
    GameOptions, Theme, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, INPUT_POLL_INTERVAL_MS,
    THEME_CLASSIC, THEME_NEON, THEME_OCEAN,
};
use gridsnake::game::{GameState, GameStatus};
use gridsnake::input::{self, Direction, GameInput};
use gridsnake::renderer;
use gridsnake::rng::Lcg;
use gridsnake::score::{load_high_score, save_high_score};
use gridsnake::terminal_runtime::{install_panic_hook, TerminalSession};
use gridsnake::ui::hud::HudInfo;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum ThemeChoice {
    Classic,
    Ocean,
    Neon,
}

impl ThemeChoice {
    fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
            Self::Neon => &THEME_NEON,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gridsnake", about = "Deterministic grid Snake in the terminal", version)]
struct Cli {
    /// Board size in cells (square grid).
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Seed for the reference generator; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between simulation ticks.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Color theme.
    #[arg(long, value_enum, default_value = "classic")]
    theme: ThemeChoice,

    /// Skip the start overlay and begin playing immediately.
    #[arg(long)]
    no_menu: bool,

    /// Print a JSON snapshot of the final state after the session ends.
    #[arg(long)]
    dump_state: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let options = GameOptions::new(cli.grid_size)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut high_score = load_high_score().unwrap_or_else(|error| {
        eprintln!("Failed to read high score: {error}");
        0
    });

    install_panic_hook();
    let (state, paused) = run(&cli, options, seed, &mut high_score)?;

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(&state.snapshot(paused))?);
    }

    Ok(())
}

fn run(
    cli: &Cli,
    options: GameOptions,
    seed: u32,
    high_score: &mut u32,
) -> io::Result<(GameState<Lcg>, bool)> {
    let mut session = TerminalSession::enter()?;
    let theme = cli.theme.theme();
    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let poll_interval = Duration::from_millis(INPUT_POLL_INTERVAL_MS);

    let mut state = GameState::new(options, Lcg::new(seed));
    let mut queued: Option<Direction> = None;
    let mut paused = false;
    let mut on_start_screen = !cli.no_menu;
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    theme,
                    high_score: *high_score,
                    paused,
                    on_start_screen,
                },
            );
        })?;

        if let Some(game_input) = input::poll_input(poll_interval)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Pause => {
                    if !on_start_screen && state.status == GameStatus::Playing {
                        paused = !paused;
                    }
                }
                GameInput::Restart => {
                    if on_start_screen {
                        on_start_screen = false;
                    } else {
                        state = state.restart();
                        queued = None;
                        paused = false;
                    }
                    last_tick = Instant::now();
                }
                GameInput::Direction(direction) => {
                    if on_start_screen {
                        on_start_screen = false;
                        last_tick = Instant::now();
                    }
                    // Latest request wins; the tick consumes at most one.
                    queued = Some(direction);
                }
            }
        }

        let ready_to_step = !paused && !on_start_screen && state.status == GameStatus::Playing;
        if ready_to_step && last_tick.elapsed() >= tick_interval {
            state = state.step(queued.take());
            last_tick = Instant::now();

            if state.status == GameStatus::GameOver && state.score > *high_score {
                *high_score = state.score;
                if let Err(error) = save_high_score(*high_score) {
                    eprintln!("Failed to save high score: {error}");
                }
            }
        }
    }

    Ok((state, paused))
}
