//! flightdesk application runtime (terminal lifecycle, workers, and event loop).

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{FetchOutcome, RunOptions, handle_fetch_outcome, handle_tick, run};
