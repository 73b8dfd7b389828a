use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::state::{AppState, FlightOffer, SortKey};
use crate::theme::Theme;
use crate::util::format_fare;

/// Header titles in display order. Airline and Price are sortable.
pub const COLUMN_TITLES: [&str; 7] = [
    "No.",
    "Airline",
    "Flight Number",
    "Price",
    "Departure Airport",
    "Arrival Airport",
    "Stop/Duration",
];

/// Marker appended to sortable header titles.
pub const SORTABLE_MARKER: &str = " ⇅";

/// Column index of the Airline header.
const AIRLINE_COL: usize = 1;
/// Column index of the Price header.
const PRICE_COL: usize = 3;
/// Gap between columns.
const COLUMN_SPACING: u16 = 1;

/// Column widths shared by the table widget and the header hit-test layout.
const WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Fill(3),
    Constraint::Length(14),
    Constraint::Length(10),
    Constraint::Length(18),
    Constraint::Length(16),
    Constraint::Fill(2),
];

/// What: Produce the seven display cells for one offer.
///
/// Inputs:
/// - `index`: Zero-based position in the visible list.
/// - `offer`: Offer to render.
///
/// Output:
/// - Cell texts; missing fields become empty strings.
#[must_use]
pub fn row_cells(index: usize, offer: &FlightOffer) -> [String; 7] {
    [
        (index + 1).to_string(),
        offer.airline_name().unwrap_or_default().to_string(),
        offer.flight_number().unwrap_or_default().to_string(),
        format_fare(offer.fare),
        offer.departure_code().unwrap_or_default().to_string(),
        offer.arrival_code().unwrap_or_default().to_string(),
        offer.stop_duration().unwrap_or_default(),
    ]
}

/// Header row with sort markers and the active column emphasized.
fn header_row(th: &Theme, sort_key: SortKey) -> Row<'static> {
    let cells = COLUMN_TITLES.iter().enumerate().map(|(i, title)| {
        let active = matches!(
            (i, sort_key),
            (AIRLINE_COL, SortKey::Airline) | (PRICE_COL, SortKey::Fare)
        );
        if i == AIRLINE_COL || i == PRICE_COL {
            let style = if active {
                Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
            };
            Cell::from(Line::from(vec![
                Span::styled(*title, style),
                Span::styled(SORTABLE_MARKER, style),
            ]))
        } else {
            Cell::from(Span::styled(
                *title,
                Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD),
            ))
        }
    });
    Row::new(cells)
}

/// What: Render the offers table and record header hit-test rects.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state (`visible_offers`, applied sort, `table_state`).
/// - `th`: Palette.
/// - `area`: Body area.
pub fn render_offers_table(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let rows: Vec<Row> = app
        .visible_offers
        .iter()
        .enumerate()
        .map(|(i, offer)| {
            let [no, airline, flight, fare, dep, arr, stops] = row_cells(i, offer);
            Row::new(vec![
                Cell::from(Span::styled(no, Style::default().fg(th.overlay1))),
                Cell::from(Span::styled(
                    airline,
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Cell::from(flight),
                Cell::from(Span::styled(fare, Style::default().fg(th.green))),
                Cell::from(dep),
                Cell::from(arr),
                Cell::from(Span::styled(stops, Style::default().fg(th.subtext0))),
            ])
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!("Flights ({})", app.visible_offers.len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);

    let table = Table::new(rows, WIDTHS)
        .header(header_row(th, app.active_sort()))
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .style(Style::default().fg(th.text).bg(th.base))
        .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender));
    f.render_stateful_widget(table, area, &mut app.table_state);

    app.table_rect = Some((area.x, area.y, area.width, area.height));
    if inner.height == 0 {
        app.airline_header_rect = None;
        app.price_header_rect = None;
        return;
    }
    let header_line = Rect::new(inner.x, inner.y, inner.width, 1);
    let cols = Layout::horizontal(WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(header_line);
    let to_hit = |r: Rect| Some((r.x, r.y, r.width, r.height));
    app.airline_header_rect = to_hit(cols[AIRLINE_COL]);
    app.price_header_rect = to_hit(cols[PRICE_COL]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Incomplete records render blank cells instead of failing
    fn row_cells_blank_for_missing_fields() {
        let cells = row_cells(0, &FlightOffer::default());
        assert_eq!(cells[0], "1");
        assert!(cells[1..].iter().all(String::is_empty), "{cells:?}");
    }

    #[test]
    /// What: Complete records fill every column in order
    fn row_cells_complete() {
        let offer: FlightOffer = serde_json::from_str(
            r#"{"fare": 3999, "displayData": {
                "airlines": [{"airlineName": "Vistara", "flightNumber": "UK 955"}],
                "source": {"airport": {"airportCode": "DEL"}},
                "destination": {"airport": {"airportCode": "BOM"}},
                "stopInfo": "Non stop", "totalDuration": "2h 5m"}}"#,
        )
        .expect("valid offer");
        assert_eq!(
            row_cells(4, &offer),
            [
                "5".to_string(),
                "Vistara".to_string(),
                "UK 955".to_string(),
                "3999".to_string(),
                "DEL".to_string(),
                "BOM".to_string(),
                "Non stop/(2h 5m)".to_string(),
            ]
        );
    }
}
