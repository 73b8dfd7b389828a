//! Flight offers endpoint client.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::state::{FlightOffer, OffersEnvelope};

/// Failure while loading offers. Every variant is handled the same way by the
/// runtime (logged, list left untouched); the split only improves the log line.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status.
    #[error("offers endpoint returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// Body was not the expected `{ data: { result: [...] } }` JSON.
    #[error("malformed offers payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What: Build the HTTP client used for the offers request.
///
/// Inputs:
/// - `timeout`: Whole-request timeout.
///
/// Output:
/// - Configured `reqwest::Client`, or the plain default client if the builder fails.
#[must_use]
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("flightdesk/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "failed to build configured HTTP client; using defaults");
            reqwest::Client::new()
        })
}

/// What: Decode an offers response body.
///
/// Inputs:
/// - `body`: Raw response bytes.
///
/// Output:
/// - The `data.result` list in endpoint order.
///
/// # Errors
/// - [`FetchError::Decode`] when the body is not JSON or lacks `data.result`.
pub fn parse_offers(body: &[u8]) -> Result<Vec<FlightOffer>, FetchError> {
    let envelope: OffersEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.data.result)
}

/// What: Fetch flight offers from `url`.
///
/// Inputs:
/// - `client`: Shared HTTP client (see [`build_client`]).
/// - `url`: Offers endpoint.
///
/// Output:
/// - `Ok(offers)` in endpoint order.
///
/// # Errors
/// - [`FetchError::Network`] when the request or body read fails.
/// - [`FetchError::Status`] for non-2xx responses.
/// - [`FetchError::Decode`] when the payload shape does not match.
pub async fn fetch_offers(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<FlightOffer>, FetchError> {
    let started = Instant::now();
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    let body = resp.bytes().await?;
    let offers = parse_offers(&body)?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        offers = offers.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "fetched flight offers"
    );
    Ok(offers)
}
