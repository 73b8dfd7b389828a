use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::build_client;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod workers;

use channels::Channels;
pub use channels::FetchOutcome;
pub use event_loop::{handle_fetch_outcome, handle_tick};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Session parameters resolved from settings and command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Offers endpoint URL.
    pub endpoint_url: String,
    /// Whole-request timeout for the offers fetch.
    pub request_timeout: Duration,
    /// Re-apply the active sort key after each search edit.
    pub keep_sort_on_search: bool,
    /// Run without a terminal (no raw mode, no drawing, no input thread).
    pub headless: bool,
}

impl RunOptions {
    /// Build options from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, headless: bool) -> Self {
        Self {
            endpoint_url: settings.endpoint_url.clone(),
            request_timeout: settings.request_timeout,
            keep_sort_on_search: settings.keep_sort_on_search,
            headless,
        }
    }
}

/// What: Run the travel-request screen end-to-end.
///
/// Inputs:
/// - `opts`: Session options.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or teardown errors.
///
/// Details:
/// - Sets up the terminal, spawns the input thread, the spinner tick and the
///   single offers fetch, then drives the event loop until Esc/Ctrl+C.
/// - The terminal is restored before returning, also when creating the
///   ratatui terminal fails.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = opts.headless;
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState::new(opts.keep_sort_on_search);
    let mut channels = Channels::new();

    workers::spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    workers::spawn_tick_worker(channels.tick_tx.clone());
    workers::spawn_fetch_worker(
        build_client(opts.request_timeout),
        opts.endpoint_url.clone(),
        channels.fetch_tx.clone(),
    );

    event_loop::run_event_loop(terminal.as_mut(), &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
