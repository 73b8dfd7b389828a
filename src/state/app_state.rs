//! Central `AppState` container owned by the event loop.

use ratatui::widgets::TableState;

use crate::state::types::{FlightOffer, SortKey};

/// Screen rectangle recorded during rendering: `(x, y, width, height)`.
pub type HitRect = Option<(u16, u16, u16, u16)>;

/// Application state shared by the event, networking and UI layers.
///
/// Only the event loop mutates it. `visible_offers` is always derived from
/// `all_offers` by the filter and sort stages in [`crate::logic`]; nothing else
/// writes to it directly.
#[derive(Debug, Default)]
pub struct AppState {
    /// Offers exactly as returned by the last successful fetch.
    pub all_offers: Vec<FlightOffer>,
    /// Offers currently shown in the table.
    pub visible_offers: Vec<FlightOffer>,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Whether `visible_offers` is currently ordered by `sort_key`. A fetch or
    /// a search edit that rebuilds the list in fetch order clears it.
    pub sort_applied: bool,
    /// Airline search text as typed.
    pub search_term: String,
    /// True while the initial fetch is outstanding.
    pub is_loading: bool,
    /// Re-apply the active sort key after each search edit.
    pub keep_sort_on_search: bool,

    /// Index into `visible_offers` that is currently highlighted.
    pub selected: usize,
    /// Ratatui table state mirroring `selected`.
    pub table_state: TableState,
    /// Animation frame counter for the loading spinner.
    pub spinner_frame: usize,

    /// Search input area.
    pub search_rect: HitRect,
    /// "Add Booking" button area.
    pub add_booking_rect: HitRect,
    /// Table area (including header row).
    pub table_rect: HitRect,
    /// Clickable Airline header cell.
    pub airline_header_rect: HitRect,
    /// Clickable Price header cell.
    pub price_header_rect: HitRect,
}

impl AppState {
    /// What: Build the initial state for a session.
    ///
    /// Inputs:
    /// - `keep_sort_on_search`: Whether search edits re-apply the active sort key.
    ///
    /// Output:
    /// - Empty state with `is_loading` set, ready for the initial fetch.
    #[must_use]
    pub fn new(keep_sort_on_search: bool) -> Self {
        Self {
            is_loading: true,
            keep_sort_on_search,
            ..Self::default()
        }
    }

    /// Sort key the visible rows are actually ordered by.
    #[must_use]
    pub const fn active_sort(&self) -> SortKey {
        if self.sort_applied {
            self.sort_key
        } else {
            SortKey::None
        }
    }

    /// What: Move the highlighted row by `delta`, clamped to the visible list.
    ///
    /// Inputs:
    /// - `delta`: Signed row offset (negative moves up).
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_offers.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
            return;
        }
        let last = self.visible_offers.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(last);
        self.selected = next;
        self.table_state.select(Some(next));
    }

    /// What: Clamp the selection after `visible_offers` changed.
    ///
    /// Details:
    /// - Clears the selection when the list is empty; otherwise keeps the index
    ///   when still in range, else selects the last row.
    pub fn clamp_selection(&mut self) {
        if self.visible_offers.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(self.visible_offers.len() - 1);
            self.table_state.select(Some(self.selected));
        }
    }
}
