//! Application state and the flight offer data model.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, HitRect};
pub use types::{
    Airline, Airport, DisplayData, Endpoint, FlightOffer, OffersData, OffersEnvelope, SortKey,
};
