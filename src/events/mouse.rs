use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::{add_booking, set_sort_key};
use crate::state::{AppState, HitRect, SortKey};

/// What: Check whether a point lies inside a recorded rectangle.
///
/// Inputs:
/// - `mx`, `my`: Mouse column and row.
/// - `rect`: Optional `(x, y, width, height)`.
///
/// Output:
/// - `false` for `None`; inclusive start, exclusive end bounds otherwise.
const fn is_point_in_rect(mx: u16, my: u16, rect: HitRect) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x + w && my >= y && my < y + h
    } else {
        false
    }
}

/// What: Handle a mouse event against the rects recorded by the last draw.
///
/// Inputs:
/// - `m`: Mouse event.
/// - `app`: Mutable application state.
///
/// Output:
/// - Always `false` (mouse input never exits).
///
/// Details:
/// - Left click on the Airline or Price header selects that sort key.
/// - Left click on Add Booking triggers the inert booking action.
/// - Wheel over the table moves the highlighted row.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if is_point_in_rect(mx, my, app.airline_header_rect) {
                set_sort_key(app, SortKey::Airline);
            } else if is_point_in_rect(mx, my, app.price_header_rect) {
                set_sort_key(app, SortKey::Fare);
            } else if is_point_in_rect(mx, my, app.add_booking_rect) {
                add_booking(app);
            }
        }
        MouseEventKind::ScrollDown if is_point_in_rect(mx, my, app.table_rect) => {
            app.move_selection(1);
        }
        MouseEventKind::ScrollUp if is_point_in_rect(mx, my, app.table_rect) => {
            app.move_selection(-1);
        }
        _ => {}
    }
    false
}
