use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::Theme;

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search Flights";
/// Label of the (inert) booking button.
pub const ADD_BOOKING_LABEL: &str = "+ Add Booking";
/// Screen heading.
pub const HEADING: &str = "✈ Travel Request ✈";

/// Width of the booking button including borders.
const BUTTON_WIDTH: u16 = 19;

/// Render the centered heading line.
pub fn render_heading(f: &mut Frame, th: &Theme, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(heading, area);
}

/// What: Render the search input and the Add Booking button.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit-test rects are recorded here.
/// - `th`: Palette.
/// - `area`: Row reserved for the nav bar (3 lines high).
///
/// Details:
/// - Shows the dimmed placeholder while the term is empty and keeps the terminal
///   cursor at the end of the typed text. Long terms scroll so the tail stays visible.
pub fn render_nav_bar(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(area);
    let (search_area, button_area) = (cols[0], cols[1]);

    // Room left for text inside the borders after the "> " prompt
    let text_room = usize::from(search_area.width.saturating_sub(2 + 2 + 1));
    let term_width = app.search_term.width();
    let shown = if term_width > text_room {
        tail_fitting(&app.search_term, text_room)
    } else {
        app.search_term.as_str()
    };
    let content = if app.search_term.is_empty() {
        Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(shown.to_string(), Style::default().fg(th.text))
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        content,
    ]))
    .style(Style::default().fg(th.text).bg(th.base))
    .block(
        Block::default()
            .title(Span::styled("Search", Style::default().fg(th.mauve)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.mauve)),
    );
    f.render_widget(input, search_area);
    app.search_rect = Some((
        search_area.x,
        search_area.y,
        search_area.width,
        search_area.height,
    ));

    // Cursor after the typed text
    let typed = if app.search_term.is_empty() {
        0
    } else {
        u16::try_from(shown.width()).unwrap_or(u16::MAX)
    };
    let right = search_area.x + search_area.width.saturating_sub(2);
    let x = (search_area.x + 1 + 2).saturating_add(typed).min(right);
    f.set_cursor_position(Position::new(x, search_area.y + 1));

    let button = Paragraph::new(Line::from(Span::styled(
        ADD_BOOKING_LABEL,
        Style::default().fg(th.green).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(button, button_area);
    app.add_booking_rect = Some((
        button_area.x,
        button_area.y,
        button_area.width,
        button_area.height,
    ));
}

/// Longest suffix of `s` whose display width fits in `room` columns.
fn tail_fitting(s: &str, room: usize) -> &str {
    let mut used = 0usize;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}
