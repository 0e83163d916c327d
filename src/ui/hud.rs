use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

/// Presentation-owned values that accompany the engine state each frame.
///
/// The engine knows nothing about pausing or the start overlay; both live
/// here, in the layer that owns the only mutable reference to the game.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    pub high_score: u32,
    pub paused: bool,
    pub on_start_screen: bool,
}

/// Renders the one-line HUD below the play area and returns the remaining
/// area above it.
#[must_use]
pub fn render_hud<R>(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState<R>,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let text = Style::default().fg(info.theme.hud_text);
    let accent = Style::default().fg(info.theme.hud_accent);

    let score_line = Line::from(vec![
        Span::styled(" Score ", text),
        Span::styled(state.score.to_string(), accent),
        Span::styled("  Hi ", text),
        Span::styled(info.high_score.to_string(), accent),
    ]);
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Left),
        hud_area,
    );

    let status_line = Line::from(Span::styled(
        status_text(state.status, info.paused, info.on_start_screen),
        text,
    ));
    frame.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Right),
        hud_area,
    );

    play_area
}

fn status_text(status: GameStatus, paused: bool, on_start_screen: bool) -> &'static str {
    if on_start_screen {
        return "Steer to start ";
    }

    match status {
        GameStatus::GameOver => "Game over. [R] Restart ",
        GameStatus::Playing if paused => "Paused ",
        GameStatus::Playing => "Playing ",
    }
}
