//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests drive the public state/logic API and check what ends up in the
//! terminal buffer: which body view is shown, column headers, row order after
//! sorting and filtering, and the hit-test rects recorded for mouse input.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use flightdesk::app::handle_fetch_outcome;
use flightdesk::events::handle_event;
use flightdesk::logic::{apply_search_filter, set_sort_key};
use flightdesk::sources::parse_offers;
use flightdesk::state::{AppState, FlightOffer, SortKey};
use flightdesk::ui;

const OFFERS_JSON: &str = r#"{
  "data": {
    "result": [
      {
        "fare": 5200,
        "displayData": {
          "airlines": [{ "airlineName": "Alpha Air", "flightNumber": "AA 101" }],
          "source": { "airport": { "airportCode": "DEL" } },
          "destination": { "airport": { "airportCode": "BOM" } },
          "stopInfo": "Non stop",
          "totalDuration": "2h 10m"
        }
      },
      {
        "fare": 3100,
        "displayData": {
          "airlines": [{ "airlineName": "Zeta Air", "flightNumber": "ZA 7" }],
          "source": { "airport": { "airportCode": "DEL" } },
          "destination": { "airport": { "airportCode": "BLR" } },
          "stopInfo": "1 stop",
          "totalDuration": "4h 05m"
        }
      }
    ]
  }
}"#;

fn sample_offers() -> Vec<FlightOffer> {
    parse_offers(OFFERS_JSON.as_bytes()).expect("sample payload parses")
}

fn loaded_state() -> AppState {
    let mut app = AppState::new(false);
    handle_fetch_outcome(&mut app, Ok(sample_offers()));
    app
}

/// Render the UI into a fresh `TestBackend` and return the terminal.
fn render_ui_to_backend(app: &mut AppState) -> Terminal<TestBackend> {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("failed to create test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    terminal
}

/// Collect every buffer row as a plain string.
fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_lines(terminal).join("\n")
}

fn row_of(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|l| l.contains(needle))
}

fn left_click(x: u16, y: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
/// What: The loading view replaces the table while the fetch is outstanding
fn ui_loading_state_shows_spinner_only() {
    let mut app = AppState::new(false);
    let terminal = render_ui_to_backend(&mut app);
    let text = screen_text(&terminal);

    assert!(text.contains(ui::LOADING_LABEL));
    assert!(!text.contains(ui::EMPTY_MESSAGE));
    assert!(!text.contains("Flight Number"));
    assert!(app.table_rect.is_none());
}

#[test]
/// What: Loading wins over a populated list
fn ui_loading_has_priority_over_rows() {
    let mut app = loaded_state();
    app.is_loading = true;
    let terminal = render_ui_to_backend(&mut app);
    let text = screen_text(&terminal);

    assert!(text.contains(ui::LOADING_LABEL));
    assert!(!text.contains("Alpha Air"));
}

#[test]
/// What: A failed fetch ends in the empty-state message
fn ui_failed_fetch_shows_empty_message() {
    let mut app = AppState::new(false);
    let err = parse_offers(b"not json").expect_err("garbage must fail");
    handle_fetch_outcome(&mut app, Err(err));
    let terminal = render_ui_to_backend(&mut app);
    let text = screen_text(&terminal);

    assert!(text.contains(ui::EMPTY_MESSAGE));
    assert!(!text.contains(ui::LOADING_LABEL));
}

#[test]
/// What: A successful fetch with no offers ends in the empty-state message
fn ui_empty_fetch_shows_empty_message() {
    let mut app = AppState::new(false);
    handle_fetch_outcome(&mut app, Ok(Vec::new()));
    let text = screen_text(&render_ui_to_backend(&mut app));

    assert!(text.contains(ui::EMPTY_MESSAGE));
    assert!(!text.contains(ui::LOADING_LABEL));
    assert!(!text.contains("Flight Number"));
    assert!(app.table_rect.is_none());
    assert!(app.visible_offers.is_empty());
}

#[test]
/// What: A sort chosen while loading is not shown once the fetch lands in endpoint order
fn ui_sort_chosen_while_loading_not_shown_as_applied() {
    let mut app = AppState::new(false);
    set_sort_key(&mut app, SortKey::Fare);
    handle_fetch_outcome(&mut app, Ok(sample_offers()));

    let lines = buffer_lines(&render_ui_to_backend(&mut app));
    let text = lines.join("\n");
    assert!(text.contains("[unsorted]"));
    assert!(!text.contains("[price ↑]"));
    let alpha = row_of(&lines, "Alpha Air").expect("alpha row");
    let zeta = row_of(&lines, "Zeta Air").expect("zeta row");
    assert!(alpha < zeta, "rows stay in endpoint order");

    // F3 now sorts the fetched rows and the footer follows
    handle_event(CEvent::Key(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE)), &mut app);
    let lines = buffer_lines(&render_ui_to_backend(&mut app));
    assert!(lines.join("\n").contains("[price ↑]"));
    let alpha = row_of(&lines, "Alpha Air").expect("alpha row");
    let zeta = row_of(&lines, "Zeta Air").expect("zeta row");
    assert!(zeta < alpha, "3100 listed before 5200");
}

#[test]
/// What: A search edit that drops the sort order also drops the sort indicator
fn ui_search_after_sort_clears_indicator() {
    let mut app = loaded_state();
    set_sort_key(&mut app, SortKey::Fare);
    assert!(screen_text(&render_ui_to_backend(&mut app)).contains("[price ↑]"));

    app.search_term = "air".to_string();
    apply_search_filter(&mut app);
    let text = screen_text(&render_ui_to_backend(&mut app));
    assert!(text.contains("[unsorted]"));
    assert!(!text.contains("[price ↑]"));
}

#[test]
/// What: Loaded offers render headers and one row per offer
fn ui_table_renders_headers_and_rows() {
    let mut app = loaded_state();
    let terminal = render_ui_to_backend(&mut app);
    let text = screen_text(&terminal);

    for title in ["No.", "Airline", "Flight Number", "Price", "Departure Airport"] {
        assert!(text.contains(title), "missing header {title}");
    }
    assert!(text.contains("Alpha Air"));
    assert!(text.contains("AA 101"));
    assert!(text.contains("5200"));
    assert!(text.contains("DEL"));
    assert!(text.contains("BOM"));
    assert!(text.contains("Non stop/(2h 10m)"));
    assert!(text.contains("Zeta Air"));
    assert!(!text.contains(ui::EMPTY_MESSAGE));
}

#[test]
/// What: Fare sort reorders the rendered rows, cheapest first
fn ui_fare_sort_reorders_rows() {
    let mut app = loaded_state();
    let lines = buffer_lines(&render_ui_to_backend(&mut app));
    let alpha = row_of(&lines, "Alpha Air").expect("alpha row");
    let zeta = row_of(&lines, "Zeta Air").expect("zeta row");
    assert!(alpha < zeta, "endpoint order before sorting");

    set_sort_key(&mut app, SortKey::Fare);
    let lines = buffer_lines(&render_ui_to_backend(&mut app));
    let alpha = row_of(&lines, "Alpha Air").expect("alpha row");
    let zeta = row_of(&lines, "Zeta Air").expect("zeta row");
    assert!(zeta < alpha, "3100 must be listed before 5200");
}

#[test]
/// What: Typing a search term hides non-matching airlines
fn ui_search_filters_rows() {
    let mut app = loaded_state();
    app.search_term = "zeta".to_string();
    apply_search_filter(&mut app);
    let text = screen_text(&render_ui_to_backend(&mut app));

    assert!(text.contains("Zeta Air"));
    assert!(!text.contains("Alpha Air"));
    assert!(text.contains("zeta"));
    assert!(!text.contains(ui::SEARCH_PLACEHOLDER));
}

#[test]
/// What: A search matching nothing shows the empty-state message
fn ui_search_without_match_shows_empty() {
    let mut app = loaded_state();
    app.search_term = "Lufthansa".to_string();
    apply_search_filter(&mut app);
    let text = screen_text(&render_ui_to_backend(&mut app));

    assert!(text.contains(ui::EMPTY_MESSAGE));
    assert!(app.airline_header_rect.is_none());
}

#[test]
/// What: Nav bar shows the placeholder, the booking button and the heading
fn ui_nav_bar_contents() {
    let mut app = loaded_state();
    let text = screen_text(&render_ui_to_backend(&mut app));

    assert!(text.contains(ui::SEARCH_PLACEHOLDER));
    assert!(text.contains(ui::ADD_BOOKING_LABEL));
    assert!(text.contains("Travel Request"));
    assert!(app.search_rect.is_some());
    assert!(app.add_booking_rect.is_some());
}

#[test]
/// What: Clicking the recorded header cells selects the matching sort key
fn ui_header_clicks_sort() {
    let mut app = loaded_state();
    let _ = render_ui_to_backend(&mut app);

    let (px, py, _, _) = app.price_header_rect.expect("price header rect");
    assert!(!handle_event(left_click(px, py), &mut app));
    assert_eq!(app.sort_key, SortKey::Fare);
    assert_eq!(
        app.visible_offers[0].airline_name(),
        Some("Zeta Air"),
        "cheapest first"
    );

    let (ax, ay, _, _) = app.airline_header_rect.expect("airline header rect");
    handle_event(left_click(ax, ay), &mut app);
    assert_eq!(app.sort_key, SortKey::Airline);
    assert_eq!(app.visible_offers[0].airline_name(), Some("Alpha Air"));
}

#[test]
/// What: Clicking the booking button leaves the offers untouched
fn ui_add_booking_click_is_inert() {
    let mut app = loaded_state();
    let _ = render_ui_to_backend(&mut app);
    let before = app.visible_offers.clone();

    let (bx, by, _, _) = app.add_booking_rect.expect("button rect");
    assert!(!handle_event(left_click(bx, by), &mut app));
    assert_eq!(app.visible_offers, before);
    assert_eq!(app.sort_key, SortKey::None);
}
