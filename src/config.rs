use ratatui::style::Color;
use thiserror::Error;

/// Smallest square grid able to hold the 3-segment starting snake with room
/// to move.
pub const MIN_GRID_SIZE: u16 = 4;

/// Default board size in cells.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default simulation tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 130;

/// How long one input poll blocks between frames, in milliseconds.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

/// Validated engine configuration.
///
/// Construction is the only place the simulation rejects anything: a grid
/// smaller than [`MIN_GRID_SIZE`] cannot hold the starting snake. Every
/// `GameOptions` value that exists is valid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOptions {
    grid_size: u16,
}

impl GameOptions {
    /// Validates and wraps a grid size.
    pub fn new(grid_size: u16) -> Result<Self, ConfigError> {
        if grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { grid_size });
        }

        Ok(Self { grid_size })
    }

    /// Returns the side length of the square board in cells.
    #[must_use]
    pub fn grid_size(self) -> u16 {
        self.grid_size
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

/// Configuration errors surfaced before a game is created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {grid_size} cannot hold the starting snake; minimum is {MIN_GRID_SIZE}")]
    GridTooSmall { grid_size: u16 },
}

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Head glyphs by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    hud_text: Color::DarkGray,
    hud_accent: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    hud_text: Color::DarkGray,
    hud_accent: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    hud_text: Color::DarkGray,
    hud_accent: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

#[cfg(test)]
mod tests {
    use super::{ConfigError, GameOptions, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};

    #[test]
    fn grids_below_the_minimum_are_rejected() {
        for grid_size in 0..MIN_GRID_SIZE {
            assert!(matches!(
                GameOptions::new(grid_size),
                Err(ConfigError::GridTooSmall { .. })
            ));
        }
    }

    #[test]
    fn minimum_and_default_grids_are_accepted() {
        assert_eq!(
            GameOptions::new(MIN_GRID_SIZE).map(GameOptions::grid_size),
            Ok(MIN_GRID_SIZE)
        );
        assert_eq!(GameOptions::default().grid_size(), DEFAULT_GRID_SIZE);
    }
}
