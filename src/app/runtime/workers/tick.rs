use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Spinner animation period.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// What: Spawn the periodic tick used to animate the loading spinner.
///
/// Inputs:
/// - `tick_tx`: Channel sender for ticks.
///
/// Details:
/// - Stops once the receiver is dropped. Missed ticks are skipped rather than
///   bursted after a stall.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut every = interval(TICK_PERIOD);
        every.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            every.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
