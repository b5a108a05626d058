use std::error::Error;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ring_snake::config::{BOARD_SIZE, DEFAULT_WIN_SCORE, Difficulty, SessionConfig};
use ring_snake::game::GameState;
use ring_snake::game_loop::{self, GameError};
use ring_snake::input::{GameInput, TerminalInput};
use ring_snake::logging;
use ring_snake::renderer::{Canvas, Placement};
use ring_snake::settings::{self, SettingsError};
use ring_snake::terminal_runtime::{
    AppTerminal, TerminalCanvas, TerminalSession, cleanup_terminal_best_effort,
};
use ring_snake::ui::menu::render_welcome;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty from 1 (slowest) to 5 (fastest); skips the welcome prompt.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    difficulty: Option<u8>,

    /// Score that wins the game.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    win_score: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File to write the game log to.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal error")]
    Terminal(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!(
            "Logging disabled, could not open {}: {error}",
            log_path.display()
        );
    }

    install_panic_hook();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ring-snake: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings_path = cli.config.clone().unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings(&settings_path)?;

    let fixed_difficulty = match cli.difficulty {
        Some(level) => Some(Difficulty::new(level).map_err(SettingsError::Difficulty)?),
        None => settings.difficulty()?,
    };
    let win_score = match cli.win_score {
        Some(score) => score,
        None => settings.win_score()?.unwrap_or(DEFAULT_WIN_SCORE),
    };
    let seed = cli.seed.or(settings.seed);

    let mut session = TerminalSession::enter()?;
    let difficulty = match fixed_difficulty {
        Some(difficulty) => difficulty,
        None => match choose_difficulty(session.terminal_mut())? {
            Some(difficulty) => difficulty,
            None => {
                info!("quit from the welcome screen");
                return Ok(());
            }
        },
    };

    let config = SessionConfig {
        board: BOARD_SIZE,
        difficulty,
        win_score,
    };
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    let mut canvas = TerminalCanvas::new(session, BOARD_SIZE);
    let mut input = TerminalInput;
    let result = game_loop::run(&mut state, &mut input, &mut canvas);
    if let Err(error) = &result {
        warn!(%error, "session aborted");
    }
    result?;

    canvas.clear();
    canvas.show_message(&game_loop::outcome_banner(&state), Placement::Banner);
    canvas.flush()?;
    wait_for_key()?;

    Ok(())
}

/// Shows the welcome screen until a difficulty is picked and confirmed.
///
/// Returns `None` when the player quits instead.
fn choose_difficulty(terminal: &mut AppTerminal) -> io::Result<Option<Difficulty>> {
    let mut chosen = None;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_welcome(frame, area, chosen);
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if GameInput::from_key_event(key) == Some(GameInput::Quit) {
            return Ok(None);
        }

        match (chosen, key.code) {
            (None, KeyCode::Char(digit)) => {
                chosen = digit
                    .to_digit(10)
                    .and_then(|level| u8::try_from(level).ok())
                    .and_then(|level| Difficulty::new(level).ok());
            }
            (None, _) => {}
            (Some(difficulty), _) => return Ok(Some(difficulty)),
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
