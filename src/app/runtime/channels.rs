use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::FetchError;
use crate::state::FlightOffer;

/// Result delivered by the fetch worker.
pub type FetchOutcome = Result<Vec<FlightOffer>, FetchError>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders are kept here for the whole session so no receiver ever reports
///   a closed channel while the loop runs.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch outcome from the loader task.
    pub fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Receiving side of `fetch_tx`.
    pub fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Animation ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all channels used by the runtime.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_tx,
            fetch_rx,
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
