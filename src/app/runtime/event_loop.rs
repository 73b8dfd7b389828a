use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::{Channels, FetchOutcome};

/// What: Apply the fetch outcome to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Offers on success; the (already logged) error otherwise.
///
/// Details:
/// - Success replaces both lists with the fetched offers as-is; the current
///   search term and sort key are not re-applied, so `sort_applied` is cleared.
/// - Failure leaves both lists untouched.
/// - The loading flag is cleared either way.
pub fn handle_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) {
    if let Ok(offers) = outcome {
        app.all_offers = offers;
        app.visible_offers.clone_from(&app.all_offers);
        app.sort_applied = false;
        app.clamp_selection();
    }
    app.is_loading = false;
}

/// What: Advance the spinner while loading.
///
/// Output:
/// - `true` when the frame changed and needs a redraw; `false` once loading ended.
pub const fn handle_tick(app: &mut AppState) -> bool {
    if app.is_loading {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
        true
    } else {
        false
    }
}

/// What the loop does after one message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopStep {
    /// State may have changed; draw before waiting again.
    Redraw,
    /// Nothing visible changed.
    Idle,
    /// Leave the loop.
    Exit,
}

/// What: Wait for and process one message from any channel.
///
/// Output: Whether to redraw, keep waiting without drawing, or exit.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> LoopStep {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            if crate::events::handle_event(ev, app) {
                LoopStep::Exit
            } else {
                LoopStep::Redraw
            }
        }
        Some(outcome) = channels.fetch_rx.recv() => {
            handle_fetch_outcome(app, outcome);
            LoopStep::Redraw
        }
        Some(()) = channels.tick_rx.recv() => {
            if handle_tick(app) {
                LoopStep::Redraw
            } else {
                LoopStep::Idle
            }
        }
        else => LoopStep::Idle
    }
}

/// What: Render and process messages until an exit is requested.
///
/// Inputs:
/// - `terminal`: Terminal to draw into (`None` in headless mode).
/// - `app`: Application state.
/// - `channels`: Runtime channels.
///
/// Details:
/// - Spinner ticks after loading ended do not trigger a draw.
pub async fn run_event_loop(
    mut terminal: Option<&mut Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    let mut dirty = true;
    loop {
        if dirty
            && let Some(t) = terminal.as_deref_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "failed to draw frame");
        }
        match process_channel_messages(app, channels).await {
            LoopStep::Exit => break,
            LoopStep::Redraw => dirty = true,
            LoopStep::Idle => dirty = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::state::FlightOffer;

    #[test]
    /// What: A successful fetch fills both lists and ends loading
    fn fetch_success_sets_lists() {
        let mut app = AppState::new(false);
        let offers = vec![FlightOffer::default(), FlightOffer::default()];
        handle_fetch_outcome(&mut app, Ok(offers));
        assert!(!app.is_loading);
        assert_eq!(app.all_offers.len(), 2);
        assert_eq!(app.visible_offers.len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    /// What: A failed fetch keeps the previous lists and still ends loading
    fn fetch_failure_keeps_lists() {
        let mut app = AppState::new(false);
        handle_fetch_outcome(&mut app, Err(FetchError::Status { status: 500 }));
        assert!(!app.is_loading);
        assert!(app.all_offers.is_empty());
        assert!(app.visible_offers.is_empty());
    }

    #[test]
    /// What: Ticks animate only while loading
    fn tick_only_while_loading() {
        let mut app = AppState::new(false);
        assert!(handle_tick(&mut app));
        assert_eq!(app.spinner_frame, 1);
        app.is_loading = false;
        assert!(!handle_tick(&mut app));
        assert_eq!(app.spinner_frame, 1);
    }

    #[test]
    /// What: A key chosen while loading is not reported as applied after the fetch
    fn fetch_resets_applied_sort() {
        use crate::logic::set_sort_key;
        use crate::state::{Airline, DisplayData, SortKey};
        let offer = |name: &str, fare: f64| FlightOffer {
            fare: Some(fare),
            display_data: Some(DisplayData {
                airlines: Some(vec![Airline {
                    airline_name: Some(name.to_string()),
                    flight_number: None,
                }]),
                ..DisplayData::default()
            }),
        };
        let mut app = AppState::new(false);
        assert!(set_sort_key(&mut app, SortKey::Fare));
        handle_fetch_outcome(&mut app, Ok(vec![offer("Zeta", 500.0), offer("Alpha", 200.0)]));
        assert_eq!(app.sort_key, SortKey::Fare);
        assert_eq!(app.active_sort(), SortKey::None);
        assert_eq!(app.visible_offers[0].airline_name(), Some("Zeta"));

        // F3 again now sorts the fetched rows
        assert!(set_sort_key(&mut app, SortKey::Fare));
        assert_eq!(app.visible_offers[0].airline_name(), Some("Alpha"));
        assert_eq!(app.active_sort(), SortKey::Fare);
    }

    #[tokio::test]
    /// What: Ticks after loading ended do not ask for a redraw
    async fn idle_tick_skips_redraw() {
        let mut app = AppState::new(false);
        let mut channels = Channels::new();
        channels.tick_tx.send(()).expect("send tick");
        assert_eq!(
            process_channel_messages(&mut app, &mut channels).await,
            LoopStep::Redraw
        );
        app.is_loading = false;
        channels.tick_tx.send(()).expect("send tick");
        assert_eq!(
            process_channel_messages(&mut app, &mut channels).await,
            LoopStep::Idle
        );
    }

    #[tokio::test]
    /// What: The loop exits on Esc after applying earlier messages in order
    async fn loop_processes_messages_until_exit() {
        use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
        let mut app = AppState::new(false);
        let mut channels = Channels::new();
        channels
            .fetch_tx
            .send(Ok(vec![FlightOffer::default()]))
            .expect("send outcome");
        // Drain the fetch first so the state is known before the exit key arrives
        assert_eq!(
            process_channel_messages(&mut app, &mut channels).await,
            LoopStep::Redraw
        );
        assert!(!app.is_loading);
        channels
            .event_tx
            .send(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .expect("send key");
        run_event_loop(None, &mut app, &mut channels).await;
        assert_eq!(app.visible_offers.len(), 1);
    }
}
