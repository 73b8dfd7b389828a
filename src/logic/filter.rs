use crate::state::{AppState, FlightOffer};

/// What: Test whether an offer's first airline name contains `needle_lower`.
///
/// Inputs:
/// - `offer`: Candidate offer.
/// - `needle_lower`: Search term, already lowercased; must be non-empty.
///
/// Output:
/// - `true` on a case-insensitive substring match; `false` when the name is missing.
#[must_use]
pub fn airline_matches(offer: &FlightOffer, needle_lower: &str) -> bool {
    offer
        .airline_name()
        .is_some_and(|name| name.to_lowercase().contains(needle_lower))
}

/// What: Recompute `visible_offers` from `all_offers` for the current search term.
///
/// Inputs:
/// - `app`: Mutable application state (`all_offers`, `search_term`, `sort_key`).
///
/// Output:
/// - Replaces `visible_offers` and clamps the selection.
///
/// Details:
/// - Always starts from the fetched list, so any active sort order is dropped
///   and `sort_applied` is cleared. When `keep_sort_on_search` is set the
///   active sort key is applied again and stays marked as applied.
/// - An empty term shows every fetched offer.
pub fn apply_search_filter(app: &mut AppState) {
    if app.search_term.is_empty() {
        app.visible_offers.clone_from(&app.all_offers);
    } else {
        let needle = app.search_term.to_lowercase();
        app.visible_offers = app
            .all_offers
            .iter()
            .filter(|o| airline_matches(o, &needle))
            .cloned()
            .collect();
    }
    if app.keep_sort_on_search {
        crate::logic::sort_offers(&mut app.visible_offers, app.sort_key);
    }
    app.sort_applied = app.keep_sort_on_search;
    app.clamp_selection();
}
