use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::state::{AppState, FlightOffer, SortKey};

/// Base letters of `s` in lowercase: canonical decomposition with combining marks dropped.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// What: Compare two airline names the way a locale collator orders Latin names.
///
/// Inputs:
/// - `a`, `b`: Names to compare.
///
/// Output:
/// - Ordering by base letters first ("Éva" sorts with "Eva", before "Zeta"),
///   then unaccented before accented, then lowercase before uppercase.
#[must_use]
pub fn compare_airline_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Ascending fare order; offers without a fare go last.
fn compare_fares(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What: Stable-sort `offers` in place by `key`, always ascending.
///
/// Inputs:
/// - `offers`: List to reorder.
/// - `key`: Sort key; [`SortKey::None`] leaves the order untouched.
///
/// Details:
/// - Missing airline names compare as the empty string.
pub fn sort_offers(offers: &mut [FlightOffer], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Fare => offers.sort_by(|a, b| compare_fares(a.fare, b.fare)),
        SortKey::Airline => offers.sort_by(|a, b| {
            compare_airline_names(
                a.airline_name().unwrap_or_default(),
                b.airline_name().unwrap_or_default(),
            )
        }),
    }
}

/// What: Select a new sort key and reorder the currently visible offers.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `key`: Requested sort key.
///
/// Output:
/// - `true` when the list was re-sorted; `false` when the rows are already
///   ordered by `key` (nothing happens).
///
/// Details:
/// - Sorts `visible_offers`, not `all_offers`, so an active search filter stays applied.
/// - Re-selecting the chosen key sorts again when a fetch or search edit has
///   put the rows back in fetch order.
/// - Selection jumps to the first row after a re-sort.
pub fn set_sort_key(app: &mut AppState, key: SortKey) -> bool {
    if app.active_sort() == key {
        return false;
    }
    tracing::debug!(from = app.sort_key.as_str(), to = key.as_str(), "sort key changed");
    app.sort_key = key;
    sort_offers(&mut app.visible_offers, key);
    app.sort_applied = true;
    app.selected = 0;
    app.clamp_selection();
    true
}
