//! Event handling layer for the travel-request screen.
//!
//! Keys edit the search term unless they are one of the few global
//! shortcuts; mouse clicks are hit-tested against rects recorded by the last
//! draw.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::{add_booking, set_sort_key};
use crate::state::{AppState, SortKey};

mod mouse;
mod search;

/// Rows skipped by PageUp/PageDown.
const PAGE_ROWS: isize = 10;

/// What: Handle global shortcuts (exit, sort, booking, navigation).
///
/// Output:
/// - `Some(exit)` when the key was a shortcut; `None` to let search editing handle it.
fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    match (ke.code, ke.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(true),
        (KeyCode::F(2), _) => {
            set_sort_key(app, SortKey::Airline);
        }
        (KeyCode::F(3), _) => {
            set_sort_key(app, SortKey::Fare);
        }
        (KeyCode::F(4), _) | (KeyCode::Char('b'), KeyModifiers::CONTROL) => add_booking(app),
        (KeyCode::Up, _) => app.move_selection(-1),
        (KeyCode::Down, _) => app.move_selection(1),
        (KeyCode::PageUp, _) => app.move_selection(-PAGE_ROWS),
        (KeyCode::PageDown, _) => app.move_selection(PAGE_ROWS),
        (KeyCode::Home, _) => app.move_selection(isize::MIN),
        (KeyCode::End, _) => app.move_selection(isize::MAX),
        _ => return None,
    }
    Some(false)
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if let Some(exit) = handle_global_key(ke, app) {
                return exit;
            }
            search::handle_search_key(ke, app);
            false
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app),
        CEvent::Paste(text) => {
            let clean: String = text.chars().filter(|c| !c.is_control()).collect();
            if !clean.is_empty() {
                app.search_term.push_str(&clean);
                crate::logic::apply_search_filter(app);
            }
            false
        }
        _ => false,
    }
}
