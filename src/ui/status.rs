use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::Theme;

/// Label rendered next to the spinner glyph.
pub const LOADING_LABEL: &str = "Loading Spinner";
/// Message shown when nothing matches (or nothing was fetched).
pub const EMPTY_MESSAGE: &str = "No Flight Found";

/// Braille spinner animation frames.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame counter.
#[must_use]
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Bordered body block shared by the loading and empty views.
fn body_block(th: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1))
}

/// Vertically center a single line inside `area`'s inner region.
fn centered_line_area(area: Rect) -> Rect {
    let inner_h = area.height.saturating_sub(2);
    let y = area.y + 1 + inner_h / 2;
    Rect::new(area.x + 1, y.min(area.bottom().saturating_sub(1)), area.width.saturating_sub(2), 1)
}

/// Render the loading indicator.
pub fn render_loading(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    f.render_widget(body_block(th), area);
    let line = Line::from(vec![
        Span::styled(
            spinner_glyph(app.spinner_frame),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(LOADING_LABEL, Style::default().fg(th.subtext0)),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_line_area(area),
    );
}

/// Render the empty-state message.
pub fn render_empty(f: &mut Frame, th: &Theme, area: Rect) {
    f.render_widget(body_block(th), area);
    let line = Line::from(Span::styled(
        EMPTY_MESSAGE,
        Style::default().fg(th.red).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_line_area(area),
    );
}
