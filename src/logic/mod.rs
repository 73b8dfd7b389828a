//! Derived-state stages: search filter and sort, plus the inert booking action.

pub mod booking;
pub mod filter;
pub mod sort;

pub use booking::add_booking;
pub use filter::{airline_matches, apply_search_filter};
pub use sort::{compare_airline_names, set_sort_key, sort_offers};
