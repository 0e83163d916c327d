use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render<R>(frame: &mut Frame<'_>, state: &GameState<R>, info: &HudInfo<'_>) {
    let area = frame.area();
    let remaining = render_hud(frame, area, state, info);
    let play_area = board_area(remaining, state.grid_size);

    let block = Block::bordered().border_style(Style::new().fg(info.theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, info.theme);
    render_snake(frame, inner, state, info.theme);

    if info.on_start_screen {
        render_start_menu(frame, play_area, info.high_score, info.theme);
        return;
    }

    match state.status {
        GameStatus::Playing if info.paused => render_pause_menu(frame, play_area, info.theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, state.score, info.high_score, info.theme);
        }
        GameStatus::Playing => {}
    }
}

/// Centers the bordered board inside `area`, clipping when the terminal is
/// smaller than the grid.
fn board_area(area: Rect, grid_size: u16) -> Rect {
    let side = grid_size.saturating_add(2);
    let width = side.min(area.width);
    let height = side.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food<R>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<R>, theme: &Theme) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.grid_size, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake<R>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<R>, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid_size, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, grid_size: u16, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_grid(grid_size) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
