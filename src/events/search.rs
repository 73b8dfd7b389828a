use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::apply_search_filter;
use crate::state::AppState;

/// What: Handle a key that edits the search term.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses).
/// - `app`: Mutable application state.
///
/// Details:
/// - Printable characters append, Backspace removes the last character, Ctrl+U clears.
/// - Every edit re-runs the filter immediately; other keys are ignored.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    let changed = match (ke.code, ke.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let had = !app.search_term.is_empty();
            app.search_term.clear();
            had
        }
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.search_term.push(c);
            true
        }
        (KeyCode::Backspace, _) => app.search_term.pop().is_some(),
        _ => false,
    };
    if changed {
        apply_search_filter(app);
    }
}
