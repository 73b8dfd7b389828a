use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking terminal event reader on a dedicated thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned.
/// - `event_tx`: Channel sender for terminal events.
/// - `cancelled`: Flag checked between polls so the thread exits promptly.
///
/// Details:
/// - Polls with a short timeout instead of blocking in `read`, so shutdown never
///   waits on user input.
/// - Exits when the flag is set or the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "terminal poll failed");
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
    });
}
