//! flightdesk binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use flightdesk::{app, args::Args, theme};

/// Environment variable that switches the runtime to headless mode.
const HEADLESS_ENV: &str = "FLIGHTDESK_TEST_HEADLESS";

struct FlightdeskTimer;

impl tracing_subscriber::fmt::time::FormatTime for FlightdeskTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the subscriber filter, preferring `RUST_LOG` over the CLI level.
fn env_filter(fallback: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
}

/// What: Install the global tracing subscriber.
///
/// Details:
/// - Writes to `<config>/logs/flightdesk.log` through a non-blocking appender.
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("flightdesk.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FlightdeskTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // The TUI owns stdout; stderr keeps startup unblocked.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FlightdeskTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.log_filter());

    let mut settings = theme::settings();
    args.apply_to(&mut settings);
    let headless = std::env::var(HEADLESS_ENV).is_ok_and(|v| v == "1");
    let opts = app::RunOptions::from_settings(&settings, headless);

    tracing::info!(
        endpoint = %opts.endpoint_url,
        timeout_secs = opts.request_timeout.as_secs(),
        keep_sort_on_search = opts.keep_sort_on_search,
        headless,
        "flightdesk starting"
    );
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("flightdesk exited");
}
