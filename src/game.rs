use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::{
    Difficulty, GridSize, INITIAL_DIRECTION, INITIAL_HEAD, INITIAL_SNAKE_LENGTH, SessionConfig,
};
use crate::food::Food;
use crate::input::GameInput;
use crate::rng::SpawnArea;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Why a session ended in [`GameStatus::Lost`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    Forfeit,
    InputFailure,
}

/// Result of checking the head after a move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CheckOutcome {
    Continue,
    Collision(DeathReason),
    Food(Food),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// The session had already ended; nothing changed.
    Idle,
    Moved,
    Ate(Food),
    Won,
    Lost(DeathReason),
}

/// Checks the head against the walls, the rest of the body, then the food.
#[must_use]
pub fn check_collision(snake: &Snake, food: Option<&Food>, bounds: GridSize) -> CheckOutcome {
    let head = snake.head();
    if !bounds.is_interior(head) {
        return CheckOutcome::Collision(DeathReason::WallCollision);
    }

    if snake.head_overlaps_body() {
        return CheckOutcome::Collision(DeathReason::SelfCollision);
    }

    match food {
        Some(food) if food.position == head => CheckOutcome::Food(*food),
        _ => CheckOutcome::Continue,
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Food>,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    config: SessionConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(INITIAL_HEAD, INITIAL_DIRECTION, INITIAL_SNAKE_LENGTH),
            food: None,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.board
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub fn win_score(&self) -> u32 {
        self.config.win_score
    }

    #[must_use]
    pub fn food_exists(&self) -> bool {
        self.food.is_some()
    }

    /// Spawns food when none is on the board.
    ///
    /// Returns the newly spawned food. When the snake covers every cell food
    /// could go on, the session is won instead.
    pub fn ensure_food(&mut self) -> Option<Food> {
        if self.status.is_terminal() || self.food.is_some() {
            return None;
        }

        let area = SpawnArea::for_board(self.bounds());
        match Food::spawn(&mut self.rng, area, &self.snake) {
            Some(food) => {
                debug!(x = food.position.x, y = food.position.y, kind = ?food.kind, "food spawned");
                self.food = Some(food);
                Some(food)
            }
            None => {
                debug!(length = self.snake.len(), "no free cell left for food");
                self.status = GameStatus::Won;
                None
            }
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Applies `input`, moves the snake, then resolves collisions and food.
    pub fn tick(&mut self, input: Option<GameInput>) -> TickEvent {
        if self.status.is_terminal() {
            return TickEvent::Idle;
        }

        match input {
            Some(GameInput::Direction(direction)) => {
                if self.snake.turn(direction) {
                    debug!(?direction, "turned");
                }
            }
            Some(GameInput::Quit) => return self.lose(DeathReason::Forfeit),
            None => {}
        }

        self.tick_count += 1;
        self.snake.move_forward();

        match check_collision(&self.snake, self.food.as_ref(), self.bounds()) {
            CheckOutcome::Continue => TickEvent::Moved,
            CheckOutcome::Collision(reason) => self.lose(reason),
            CheckOutcome::Food(food) => {
                self.food = None;
                self.snake.grow();
                self.score += food.reward();
                debug!(reward = food.reward(), score = self.score, length = self.snake.len(), "food eaten");

                if self.score >= self.win_score() {
                    self.status = GameStatus::Won;
                    TickEvent::Won
                } else {
                    TickEvent::Ate(food)
                }
            }
        }
    }

    /// Ends the session as lost for `reason`.
    pub fn lose(&mut self, reason: DeathReason) -> TickEvent {
        if self.status.is_terminal() {
            return TickEvent::Idle;
        }
        debug!(?reason, score = self.score, "session lost");
        self.status = GameStatus::Lost;
        self.death_reason = Some(reason);
        TickEvent::Lost(reason)
    }
}
