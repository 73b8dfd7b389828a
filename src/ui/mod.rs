//! Rendering for the travel-request screen.
//!
//! Layout, top to bottom: heading, nav bar (search input + Add Booking
//! button), body, key-hint footer. The body shows exactly one of the loading
//! indicator, the offers table, or the empty-state message, in that priority.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, SortKey};
use crate::theme::{Theme, theme};

mod nav_bar;
mod offers_table;
mod status;

pub use nav_bar::{ADD_BOOKING_LABEL, HEADING, SEARCH_PLACEHOLDER};
pub use offers_table::{COLUMN_TITLES, SORTABLE_MARKER, row_cells};
pub use status::{EMPTY_MESSAGE, LOADING_LABEL, spinner_glyph};

/// What: Which body view a state renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyView {
    /// Fetch outstanding.
    Loading,
    /// At least one visible offer.
    Table,
    /// Nothing to show.
    Empty,
}

impl BodyView {
    /// Pick the body view for `app`; loading wins over everything else.
    #[must_use]
    pub fn for_state(app: &AppState) -> Self {
        if app.is_loading {
            Self::Loading
        } else if app.visible_offers.is_empty() {
            Self::Empty
        } else {
            Self::Table
        }
    }
}

/// Render the key-hint footer.
fn render_footer(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(th.sapphire));
    let txt = |t: &'static str| Span::styled(t, Style::default().fg(th.overlay1));
    let sort = match app.active_sort() {
        SortKey::None => "unsorted",
        SortKey::Fare => "price ↑",
        SortKey::Airline => "airline ↑",
    };
    let line = Line::from(vec![
        key("F2"),
        txt(" airline  "),
        key("F3"),
        txt(" price  "),
        key("F4"),
        txt(" add booking  "),
        key("↑/↓"),
        txt(" move  "),
        key("Esc"),
        txt(" quit   "),
        Span::styled(format!("[{sort}]"), Style::default().fg(th.yellow)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// What: Draw the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit-test rects are refreshed on every draw.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    nav_bar::render_heading(f, &th, chunks[0]);
    nav_bar::render_nav_bar(f, app, &th, chunks[1]);

    let view = BodyView::for_state(app);
    if view != BodyView::Table {
        app.table_rect = None;
        app.airline_header_rect = None;
        app.price_header_rect = None;
    }
    match view {
        BodyView::Loading => status::render_loading(f, app, &th, chunks[2]),
        BodyView::Table => offers_table::render_offers_table(f, app, &th, chunks[2]),
        BodyView::Empty => status::render_empty(f, &th, chunks[2]),
    }

    render_footer(f, app, &th, chunks[3]);
}
