use rand::Rng;

use crate::config::{GLYPH_FOOD_HIGH, GLYPH_FOOD_LOW, GLYPH_FOOD_MEDIUM};
use crate::rng::{SpawnArea, position_is_free};
use crate::snake::{Position, Snake};

/// Food type and associated metadata.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Low,
    Medium,
    High,
}

impl FoodKind {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn reward(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }

    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Low => GLYPH_FOOD_LOW,
            Self::Medium => GLYPH_FOOD_MEDIUM,
            Self::High => GLYPH_FOOD_HIGH,
        }
    }

    /// Picks a kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn reward(self) -> u32 {
        self.kind.reward()
    }

    /// Spawns food of a random kind in an unoccupied cell of `area`.
    ///
    /// Returns `None` only when every cell of the area is covered by the
    /// snake.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, area: SpawnArea, snake: &Snake) -> Option<Self> {
        let position = spawn_position(rng, area, snake)?;
        Some(Self::new(position, FoodKind::random(rng)))
    }
}

/// Samples cells of `area` until one is not occupied by the snake.
///
/// Sampling is unbounded. A scan for a free cell runs first only when the
/// snake is long enough to possibly cover the whole area.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    area: SpawnArea,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= area.cell_count()
        && !area.cells().any(|cell| position_is_free(cell, snake))
    {
        return None;
    }

    loop {
        let candidate = area.sample(rng);
        if position_is_free(candidate, snake) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Food, FoodKind, spawn_position};
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::rng::SpawnArea;
    use crate::snake::{Position, Snake};

    fn small_area() -> SpawnArea {
        SpawnArea {
            min_x: 1,
            max_x: 6,
            min_y: 1,
            max_y: 4,
        }
    }

    /// Builds a snake by a random walk that turns and grows at random.
    fn random_snake(rng: &mut StdRng) -> Snake {
        let mut snake = Snake::new(Position { x: 3, y: 2 }, Direction::Right, 2);
        for _ in 0..rng.gen_range(0..30) {
            let direction = match rng.gen_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            snake.turn(direction);
            snake.move_forward();
            if rng.gen_bool(0.4) {
                snake.grow();
            }
        }
        snake
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position { x: 4, y: 2 }, Direction::Left, 3);

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, small_area(), &snake).expect("area has free cells");
            assert!(!snake.occupies(food.position));
            assert!(small_area().cells().any(|cell| cell == food.position));
        }
    }

    #[test]
    fn food_spawn_avoids_randomized_bodies() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..200 {
            let snake = random_snake(&mut rng);
            let area = SpawnArea {
                min_x: -8,
                max_x: 14,
                min_y: -8,
                max_y: 12,
            };
            let food = Food::spawn(&mut rng, area, &snake).expect("area has free cells");
            assert!(snake.segments().all(|segment| segment.position != food.position));
        }
    }

    #[test]
    fn spawn_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(5);
        let area = SpawnArea {
            min_x: 1,
            max_x: 3,
            min_y: 1,
            max_y: 1,
        };
        let snake = Snake::new(Position { x: 1, y: 1 }, Direction::Left, 2);

        assert_eq!(
            spawn_position(&mut rng, area, &snake),
            Some(Position { x: 3, y: 1 })
        );
    }

    #[test]
    fn full_area_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(9);
        let area = SpawnArea::for_board(GridSize {
            width: 8,
            height: 4,
        });
        assert_eq!(area.cell_count(), 3);
        let snake = Snake::new(Position { x: 4, y: 2 }, Direction::Left, 3);

        assert_eq!(Food::spawn(&mut rng, area, &snake), None);
    }

    #[test]
    fn rewards_and_glyphs_follow_kind() {
        assert_eq!(FoodKind::Low.reward(), 1);
        assert_eq!(FoodKind::Medium.reward(), 3);
        assert_eq!(FoodKind::High.reward(), 5);

        assert_eq!(FoodKind::Low.glyph(), '*');
        assert_eq!(FoodKind::Medium.glyph(), '@');
        assert_eq!(FoodKind::High.glyph(), '%');
    }

    #[test]
    fn every_kind_eventually_spawns() {
        let mut rng = StdRng::seed_from_u64(13);
        let kinds: HashSet<_> = (0..100).map(|_| FoodKind::random(&mut rng)).collect();
        assert_eq!(kinds.len(), 3);
    }
}
