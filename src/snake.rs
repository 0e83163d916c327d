use serde::Serialize;

/// Grid position in logical cell coordinates, origin top-left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns this position shifted by a unit vector.
    #[must_use]
    pub fn translated(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the square grid.
    #[must_use]
    pub fn is_within_grid(self, grid_size: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i32::from(grid_size) && self.y < i32::from(grid_size)
    }
}

/// Snake body as an immutable value: segments ordered head first.
///
/// Movement never mutates a body in place. [`Snake::advanced`] builds the
/// next body so that callers holding the previous value keep an untouched
/// snapshot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snake {
    segments: Vec<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .first()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Returns true if any segment except the tail occupies `position`.
    ///
    /// The tail cell does not count because it is vacated on a non-growing
    /// movement tick.
    #[must_use]
    pub fn occupies_excluding_tail(&self, position: Position) -> bool {
        let checked = self.segments.len().saturating_sub(1);
        self.segments[..checked].contains(&position)
    }

    /// Returns the body after one movement tick: `next_head` prepended and,
    /// unless growing, the tail dropped.
    #[must_use]
    pub fn advanced(&self, next_head: Position, grow: bool) -> Self {
        let kept = if grow {
            self.segments.len()
        } else {
            self.segments.len() - 1
        };

        let mut segments = Vec::with_capacity(kept + 1);
        segments.push(next_head);
        segments.extend_from_slice(&self.segments[..kept]);
        Self { segments }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Snake};

    #[test]
    fn translated_applies_unit_vectors() {
        let origin = Position { x: 3, y: 4 };

        assert_eq!(origin.translated((0, -1)), Position { x: 3, y: 3 });
        assert_eq!(origin.translated((1, 0)), Position { x: 4, y: 4 });
    }

    #[test]
    fn grid_membership_covers_all_four_edges() {
        assert!(Position { x: 0, y: 0 }.is_within_grid(5));
        assert!(Position { x: 4, y: 4 }.is_within_grid(5));

        assert!(!Position { x: -1, y: 2 }.is_within_grid(5));
        assert!(!Position { x: 2, y: -1 }.is_within_grid(5));
        assert!(!Position { x: 5, y: 2 }.is_within_grid(5));
        assert!(!Position { x: 2, y: 5 }.is_within_grid(5));
    }

    #[test]
    fn advancing_without_growth_keeps_length_constant() {
        let snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ]);

        let next = snake.advanced(Position { x: 6, y: 5 }, false);

        assert_eq!(next.head(), Position { x: 6, y: 5 });
        assert_eq!(next.len(), 3);
        assert!(!next.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn advancing_with_growth_keeps_the_tail() {
        let snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
        ]);

        let next = snake.advanced(Position { x: 6, y: 5 }, true);

        assert_eq!(next.len(), 3);
        assert!(next.occupies(Position { x: 4, y: 5 }));
    }

    #[test]
    fn advancing_leaves_the_previous_body_untouched() {
        let snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        let _ = snake.advanced(Position { x: 3, y: 2 }, false);

        assert_eq!(snake.head(), Position { x: 2, y: 2 });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn tail_cell_is_excluded_from_the_collision_body() {
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
        ]);

        assert!(snake.occupies(Position { x: 2, y: 2 }));
        assert!(!snake.occupies_excluding_tail(Position { x: 2, y: 2 }));
        assert!(snake.occupies_excluding_tail(Position { x: 2, y: 1 }));
    }
}
