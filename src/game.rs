use serde::Serialize;

use crate::config::GameOptions;
use crate::food;
use crate::input::{is_opposite_direction, Direction};
use crate::rng::RandomSource;
use crate::snake::{Position, Snake};

/// Current simulation status.
///
/// `GameOver` is absorbing: stepping a finished game returns it unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// One immutable simulation snapshot.
///
/// Transitions never mutate in place: [`GameState::step`] and
/// [`GameState::restart`] return fresh values, so callers can hold on to any
/// number of past states for diffing or replay. The generator is part of the
/// state; a state cloned mid-game replays the identical future.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<R> {
    pub grid_size: u16,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub rng: R,
}

impl<R: RandomSource + Clone> GameState<R> {
    /// Creates a fresh game from validated options.
    ///
    /// The snake starts with 3 segments on the middle row, extending left
    /// from center, heading right. Food is drawn from `rng`.
    #[must_use]
    pub fn new(options: GameOptions, rng: R) -> Self {
        Self::with_grid(options.grid_size(), rng)
    }

    fn with_grid(grid_size: u16, mut rng: R) -> Self {
        let mid = i32::from(grid_size / 2);
        let snake = Snake::from_segments(vec![
            Position { x: mid, y: mid },
            Position { x: mid - 1, y: mid },
            Position { x: mid - 2, y: mid },
        ]);
        let food = food::spawn_position(grid_size, &snake, &mut rng);

        Self {
            grid_size,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            status: GameStatus::Playing,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// `requested` is the direction queued by the input layer for this tick,
    /// if any. A request for the exact opposite of the current direction is
    /// silently ignored rather than treated as an error: the snake cannot
    /// reverse into its own neck.
    #[must_use]
    pub fn step(&self, requested: Option<Direction>) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        let direction = match requested {
            Some(turn) if !is_opposite_direction(self.direction, turn) => turn,
            _ => self.direction,
        };

        let next_head = self.snake.head().translated(direction.vector());
        if !next_head.is_within_grid(self.grid_size) {
            return Self {
                direction,
                status: GameStatus::GameOver,
                ..self.clone()
            };
        }

        let will_grow = self.food == Some(next_head);

        // The tail vacates its cell this tick unless the snake grows, so a
        // non-growing move may enter the tail's current cell while a growing
        // move into the same cell collides.
        let hit_self = if will_grow {
            self.snake.occupies(next_head)
        } else {
            self.snake.occupies_excluding_tail(next_head)
        };
        if hit_self {
            return Self {
                direction,
                status: GameStatus::GameOver,
                ..self.clone()
            };
        }

        let snake = self.snake.advanced(next_head, will_grow);
        let mut rng = self.rng.clone();
        let (food, score) = if will_grow {
            (
                food::spawn_position(self.grid_size, &snake, &mut rng),
                self.score + 1,
            )
        } else {
            (self.food, self.score)
        };

        // No cell left to respawn food means the snake fills the board.
        let status = if food.is_some() {
            GameStatus::Playing
        } else {
            GameStatus::GameOver
        };

        Self {
            grid_size: self.grid_size,
            snake,
            direction,
            food,
            score,
            status,
            rng,
        }
    }

    /// Starts a new game on the same grid.
    ///
    /// The random stream continues where the previous game left it; it is not
    /// reset to the original seed.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::with_grid(self.grid_size, self.rng.clone())
    }
}

impl<R> GameState<R> {
    /// Builds the JSON-serializable view of this state.
    ///
    /// `paused` is owned by the presentation layer and only travels through
    /// for reporting.
    #[must_use]
    pub fn snapshot(&self, paused: bool) -> StateSnapshot<'_> {
        StateSnapshot {
            coordinate_system: "origin top-left; +x right; +y down",
            status: self.status,
            paused,
            direction: self.direction,
            snake: &self.snake,
            food: self.food,
            score: self.score,
            grid_size: self.grid_size,
        }
    }
}

/// Serializable dump of one state, mirroring what the UI reads each frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot<'a> {
    coordinate_system: &'static str,
    status: GameStatus,
    paused: bool,
    direction: Direction,
    snake: &'a Snake,
    food: Option<Position>,
    score: u32,
    grid_size: u16,
}
