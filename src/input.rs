use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction in grid coordinates (+x right, +y down).
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

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
}

/// Returns whether two directions are exact opposites, i.e. their unit
/// vectors cancel out.
#[must_use]
pub fn is_opposite_direction(a: Direction, b: Direction) -> bool {
    let (ax, ay) = a.vector();
    let (bx, by) = b.vector();
    ax + bx == 0 && ay + by == 0
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Quit,
}

/// Polls the terminal for one input event, waiting at most `timeout`.
///
/// Returns `Ok(None)` when nothing relevant arrived in time. Debouncing to
/// one queued direction per tick is the caller's job; this function only
/// translates raw key events.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Restart),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(c) => map_char(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn map_char(c: char) -> Option<GameInput> {
    match c {
        'w' => Some(GameInput::Direction(Direction::Up)),
        's' => Some(GameInput::Direction(Direction::Down)),
        'a' => Some(GameInput::Direction(Direction::Left)),
        'd' => Some(GameInput::Direction(Direction::Right)),
        ' ' | 'p' => Some(GameInput::Pause),
        'r' => Some(GameInput::Restart),
        'q' => Some(GameInput::Quit),
        _ => None,
    }
}
