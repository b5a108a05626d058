//! Fixed-tick session driver.
//!
//! Each tick waits for input for at most the difficulty's tick timeout, so
//! the wait doubles as the game clock. Input arriving early ends the wait
//! early, which lets a player speed the snake up by pressing keys quickly.

use std::io;

use thiserror::Error;
use tracing::{error, info};

use crate::game::{DeathReason, GameState, GameStatus, TickEvent};
use crate::input::InputSource;
use crate::renderer::{Canvas, Placement, SnakePainter};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to poll for input")]
    InputPoll(#[source] io::Error),
    #[error("failed to draw frame")]
    Render(#[source] io::Error),
}

/// Runs ticks until the session is won or lost and returns the final status.
///
/// A failed input poll ends the session as [`GameStatus::Lost`] with
/// [`DeathReason::InputFailure`] and is also returned as
/// [`GameError::InputPoll`].
pub fn run<I, C>(state: &mut GameState, input: &mut I, canvas: &mut C) -> Result<GameStatus, GameError>
where
    I: InputSource + ?Sized,
    C: Canvas + ?Sized,
{
    let timeout = state.difficulty().tick_timeout();
    let mut painter = SnakePainter::default();

    info!(
        difficulty = %state.difficulty(),
        win_score = state.win_score(),
        ?timeout,
        "session started"
    );

    painter.paint(&state.snake, canvas);
    canvas.show_message(&status_line(state), Placement::Status);
    canvas.flush().map_err(GameError::Render)?;

    while !state.status.is_terminal() {
        if let Some(food) = state.ensure_food() {
            canvas.draw_cell(food.position, food.kind.glyph());
            canvas.flush().map_err(GameError::Render)?;
        }
        if state.status.is_terminal() {
            break;
        }

        let key = match input.poll_key(timeout) {
            Ok(key) => key,
            Err(source) => {
                error!(error = %source, "input poll failed");
                state.lose(DeathReason::InputFailure);
                return Err(GameError::InputPoll(source));
            }
        };

        let event = state.tick(key);
        painter.paint(&state.snake, canvas);
        match event {
            TickEvent::Ate(food) => canvas.show_message(
                &format!(
                    "ate '{}' (+{}), length {}",
                    food.kind.glyph(),
                    food.reward(),
                    state.snake.len()
                ),
                Placement::Log,
            ),
            TickEvent::Won => canvas.show_message("win score reached", Placement::Log),
            TickEvent::Lost(reason) => {
                canvas.show_message(death_description(reason), Placement::Log);
            }
            TickEvent::Moved | TickEvent::Idle => {}
        }
        canvas.show_message(&status_line(state), Placement::Status);
        canvas.flush().map_err(GameError::Render)?;
    }

    info!(
        status = ?state.status,
        score = state.score,
        length = state.snake.len(),
        ticks = state.tick_count,
        "session ended"
    );
    Ok(state.status)
}

/// Text for the board's status line.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    format!(
        " Score: {} / {}  Difficulty: {} ",
        state.score,
        state.win_score(),
        state.difficulty()
    )
}

/// Text for the final win or loss banner.
#[must_use]
pub fn outcome_banner(state: &GameState) -> String {
    let headline = match state.status {
        GameStatus::Won => format!("Oh! You win! Your score: {}", state.score),
        GameStatus::Lost | GameStatus::Running => format!("Game over: your score: {}", state.score),
    };
    let cause = state.death_reason.map(death_description).unwrap_or_default();

    format!("{headline}\n{cause}\n\nPress any key to quit...")
}

fn death_description(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "hit the wall",
        DeathReason::SelfCollision => "bit yourself",
        DeathReason::Forfeit => "quit",
        DeathReason::InputFailure => "input stopped working",
    }
}
