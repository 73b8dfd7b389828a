use crate::state::AppState;

/// What: Handle the "Add Booking" action.
///
/// Inputs:
/// - `app`: Application state (read only; used for the log line).
///
/// Details:
/// - Booking creation does not exist yet; the control is kept so the layout
///   matches the finished screen. Only a debug line is logged.
pub fn add_booking(app: &AppState) {
    tracing::debug!(
        visible = app.visible_offers.len(),
        selected = app.selected,
        "add booking requested; no booking backend"
    );
}
