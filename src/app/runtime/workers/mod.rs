//! Background producers feeding the event loop.

mod fetch;
mod input;
mod tick;

pub use fetch::spawn_fetch_worker;
pub use input::spawn_event_thread;
pub use tick::spawn_tick_worker;
