use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
///
/// The outermost ring of cells is wall; only the interior is playable.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns true when `position` lies strictly inside the walls.
    #[must_use]
    pub fn is_interior(self, position: Position) -> bool {
        position.x > 0
            && position.y > 0
            && position.x < i32::from(self.width) - 1
            && position.y < i32::from(self.height) - 1
    }
}

/// Board size of every session.
pub const BOARD_SIZE: GridSize = GridSize {
    width: 60,
    height: 15,
};

/// Height of the log panel drawn under the board, borders included.
pub const LOG_PANEL_HEIGHT: u16 = 7;

/// Score at which the session is won.
pub const DEFAULT_WIN_SCORE: u32 = 50;

/// One difficulty step worth of waiting per tick.
pub const BASE_TICK_UNIT: Duration = Duration::from_millis(50);

/// Leftmost column food may be placed on.
pub const FOOD_MARGIN_LEFT: i32 = 4;

/// Topmost row food may be placed on.
pub const FOOD_MARGIN_TOP: i32 = 2;

/// Head of the snake when a session starts.
pub const INITIAL_HEAD: Position = Position { x: 50, y: 5 };

/// Travel direction when a session starts.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Segment count when a session starts.
pub const INITIAL_SNAKE_LENGTH: usize = 4;

pub const GLYPH_SNAKE_UP: char = '^';
pub const GLYPH_SNAKE_DOWN: char = 'v';
pub const GLYPH_SNAKE_LEFT: char = '<';
pub const GLYPH_SNAKE_RIGHT: char = '>';

pub const GLYPH_FOOD_LOW: char = '*';
pub const GLYPH_FOOD_MEDIUM: char = '@';
pub const GLYPH_FOOD_HIGH: char = '%';

/// Game speed chosen once per session: 1 is the slowest, 5 the fastest.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Creates a difficulty, rejecting levels outside `1..=5`.
    pub fn new(level: u8) -> Result<Self, InvalidDifficulty> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidDifficulty(level))
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Returns how long one tick waits for input.
    ///
    /// Level 1 waits five base units, level 5 waits one.
    #[must_use]
    pub fn tick_timeout(self) -> Duration {
        BASE_TICK_UNIT * u32::from(Self::MAX.0 + 1 - self.0)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = InvalidDifficulty;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("difficulty must be between 1 and 5, got {0}")]
pub struct InvalidDifficulty(pub u8);

/// Values fixed for the lifetime of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionConfig {
    pub board: GridSize,
    pub difficulty: Difficulty,
    pub win_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BOARD_SIZE,
            difficulty: Difficulty::default(),
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::{
        BOARD_SIZE, Difficulty, GridSize, INITIAL_HEAD, INITIAL_SNAKE_LENGTH, InvalidDifficulty,
    };
    use crate::snake::Position;

    #[rstest]
    #[case(1, 250)]
    #[case(2, 200)]
    #[case(3, 150)]
    #[case(4, 100)]
    #[case(5, 50)]
    fn tick_timeout_shrinks_with_difficulty(#[case] level: u8, #[case] millis: u64) {
        let difficulty = Difficulty::new(level).expect("level should be valid");
        assert_eq!(difficulty.tick_timeout(), Duration::from_millis(millis));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(u8::MAX)]
    fn out_of_range_difficulty_is_rejected(#[case] level: u8) {
        assert_eq!(Difficulty::new(level), Err(InvalidDifficulty(level)));
    }

    #[test]
    fn interior_excludes_wall_cells() {
        let bounds = GridSize {
            width: 6,
            height: 4,
        };

        assert!(bounds.is_interior(Position { x: 1, y: 1 }));
        assert!(bounds.is_interior(Position { x: 4, y: 2 }));
        assert!(!bounds.is_interior(Position { x: 0, y: 2 }));
        assert!(!bounds.is_interior(Position { x: 5, y: 2 }));
        assert!(!bounds.is_interior(Position { x: 3, y: 0 }));
        assert!(!bounds.is_interior(Position { x: 3, y: 3 }));
        assert!(!bounds.is_interior(Position { x: -1, y: 2 }));
    }

    #[test]
    fn board_has_room_for_the_initial_snake() {
        let trailing = i32::try_from(INITIAL_SNAKE_LENGTH).expect("length fits in i32") - 1;
        let tail = Position {
            x: INITIAL_HEAD.x + trailing,
            y: INITIAL_HEAD.y,
        };

        assert!(BOARD_SIZE.is_interior(INITIAL_HEAD));
        assert!(BOARD_SIZE.is_interior(tail));
    }
}
