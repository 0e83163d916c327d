use crate::rng::RandomSource;
use crate::snake::{Position, Snake};

/// Picks a food cell uniformly among cells the snake does not occupy.
///
/// Free cells are enumerated row-major (y ascending, then x ascending) and
/// one is drawn as `floor(next_unit() * count)` into that ordering. The
/// enumeration order is part of the contract: a seeded generator reproduces
/// food placement exactly, and tests depend on it.
///
/// Returns `None` when the snake covers the whole grid.
#[must_use]
pub fn spawn_position<R: RandomSource + ?Sized>(
    grid_size: u16,
    snake: &Snake,
    rng: &mut R,
) -> Option<Position> {
    let mut available = Vec::new();

    for y in 0..i32::from(grid_size) {
        for x in 0..i32::from(grid_size) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                available.push(position);
            }
        }
    }

    if available.is_empty() {
        return None;
    }

    let index = (rng.next_unit() * available.len() as f64) as usize;
    Some(available[index.min(available.len() - 1)])
}
