//! Network data retrieval.

mod offers;

pub use offers::{FetchError, build_client, fetch_offers, parse_offers};

/// Offers endpoint used when neither the settings file nor the CLI override it.
pub const DEFAULT_OFFERS_URL: &str = "https://api.npoint.io/4829d4ab0e96bfab50e7";
