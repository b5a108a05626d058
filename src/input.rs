use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step of one cell in this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

impl GameInput {
    /// Maps a key press to a game input; unmapped keys yield `None`.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Self::Quit),
            (_, KeyCode::Char('w' | 'W') | KeyCode::Up) => Some(Self::Direction(Direction::Up)),
            (_, KeyCode::Char('s' | 'S') | KeyCode::Down) => {
                Some(Self::Direction(Direction::Down))
            }
            (_, KeyCode::Char('a' | 'A') | KeyCode::Left) => {
                Some(Self::Direction(Direction::Left))
            }
            (_, KeyCode::Char('d' | 'D') | KeyCode::Right) => {
                Some(Self::Direction(Direction::Right))
            }
            (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Source of player input for the tick loop.
pub trait InputSource {
    /// Waits at most `timeout` for one input.
    ///
    /// Returns as soon as any event arrives, so a key press shortens the
    /// current tick. `Ok(None)` covers both an expired wait and an event that
    /// maps to no game input.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<GameInput>>;
}

/// Reads keyboard input from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(GameInput::from_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rstest::rstest;

    use super::{Direction, GameInput, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reverse_changes_are_rejected() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
    }

    #[rstest]
    #[case(KeyCode::Char('w'), Some(GameInput::Direction(Direction::Up)))]
    #[case(KeyCode::Char('a'), Some(GameInput::Direction(Direction::Left)))]
    #[case(KeyCode::Char('s'), Some(GameInput::Direction(Direction::Down)))]
    #[case(KeyCode::Char('d'), Some(GameInput::Direction(Direction::Right)))]
    #[case(KeyCode::Up, Some(GameInput::Direction(Direction::Up)))]
    #[case(KeyCode::Right, Some(GameInput::Direction(Direction::Right)))]
    #[case(KeyCode::Char('q'), Some(GameInput::Quit))]
    #[case(KeyCode::Esc, Some(GameInput::Quit))]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Enter, None)]
    fn keys_map_to_inputs(#[case] code: KeyCode, #[case] expected: Option<GameInput>) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(GameInput::from_key_event(key), expected);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(GameInput::from_key_event(key), Some(GameInput::Quit));
    }

    #[test]
    fn key_releases_are_ignored() {
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(GameInput::from_key_event(key), None);
    }
}
