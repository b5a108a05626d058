//! Bounded random helpers and the region food is drawn from.

use rand::Rng;

use crate::config::{FOOD_MARGIN_LEFT, FOOD_MARGIN_TOP, GridSize};
use crate::snake::{Position, Snake};

/// Returns a uniformly random integer in `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// Returns true when food may be placed at `position`.
#[must_use]
pub fn position_is_free(position: Position, snake: &Snake) -> bool {
    !snake.occupies(position)
}

/// Inclusive rectangle of interior cells food may spawn on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpawnArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SpawnArea {
    /// Returns the spawn area of `bounds`: inside the walls and past the food
    /// margins.
    #[must_use]
    pub fn for_board(bounds: GridSize) -> Self {
        Self {
            min_x: FOOD_MARGIN_LEFT,
            max_x: i32::from(bounds.width) - 2,
            min_y: FOOD_MARGIN_TOP,
            max_y: i32::from(bounds.height) - 2,
        }
    }

    /// Returns the number of cells in the area.
    #[must_use]
    pub fn cell_count(self) -> usize {
        let width = usize::try_from(self.max_x - self.min_x + 1).unwrap_or(0);
        let height = usize::try_from(self.max_y - self.min_y + 1).unwrap_or(0);
        width * height
    }

    /// Draws one uniformly random cell of the area.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            x: random_in_range(rng, self.min_x, self.max_x),
            y: random_in_range(rng, self.min_y, self.max_y),
        }
    }

    /// Iterates over every cell of the area, row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Position { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{SpawnArea, position_is_free, random_in_range};
    use crate::config::{BOARD_SIZE, GridSize};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let value = random_in_range(&mut rng, 4, 58);
            assert!((4..=58).contains(&value));
        }
        assert_eq!(random_in_range(&mut rng, 7, 7), 7);
    }

    #[test]
    fn board_spawn_area_respects_margins_and_walls() {
        let area = SpawnArea::for_board(BOARD_SIZE);

        assert_eq!(
            area,
            SpawnArea {
                min_x: 4,
                max_x: 58,
                min_y: 2,
                max_y: 13,
            }
        );
        assert_eq!(area.cell_count(), 55 * 12);
        assert!(area.cells().all(|cell| BOARD_SIZE.is_interior(cell)));
        assert_eq!(area.cells().count(), area.cell_count());
    }

    #[test]
    fn samples_land_inside_the_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let area = SpawnArea::for_board(GridSize {
            width: 10,
            height: 6,
        });

        for _ in 0..200 {
            let cell = area.sample(&mut rng);
            assert!((area.min_x..=area.max_x).contains(&cell.x));
            assert!((area.min_y..=area.max_y).contains(&cell.y));
        }
    }

    #[test]
    fn degenerate_area_has_no_cells() {
        let area = SpawnArea::for_board(GridSize {
            width: 4,
            height: 3,
        });

        assert_eq!(area.cell_count(), 0);
        assert_eq!(area.cells().count(), 0);
    }

    #[test]
    fn occupied_cells_are_not_free() {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Left, 3);

        assert!(!position_is_free(Position { x: 5, y: 5 }, &snake));
        assert!(!position_is_free(Position { x: 7, y: 5 }, &snake));
        assert!(position_is_free(Position { x: 8, y: 5 }, &snake));
    }
}
