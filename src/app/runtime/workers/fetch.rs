use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::runtime::channels::FetchOutcome;
use crate::sources;

/// What: Spawn the one-shot offers fetch.
///
/// Inputs:
/// - `client`: HTTP client built from the session's timeout.
/// - `url`: Offers endpoint.
/// - `fetch_tx`: Channel the outcome is delivered on.
///
/// Output:
/// - None (spawns an async task).
///
/// Details:
/// - Failures are logged here and still delivered, so the loop can clear the
///   loading flag. If the loop is already gone the outcome is dropped.
pub fn spawn_fetch_worker(
    client: reqwest::Client,
    url: String,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        info!(url = %url, "fetching flight offers");
        let outcome = sources::fetch_offers(&client, &url).await;
        if let Err(e) = &outcome {
            error!(url = %url, error = %e, "error fetching flight data");
        }
        let _ = fetch_tx.send(outcome);
    });
}
