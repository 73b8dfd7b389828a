//! Command-line argument definition and processing.

use std::time::Duration;

use clap::Parser;

use crate::theme::Settings;

/// flightdesk - browse flight offers, filter by airline and sort by price
#[derive(Parser, Debug)]
#[command(name = "flightdesk")]
#[command(version)]
#[command(about = "Browse flight offers in the terminal: filter by airline, sort by price or airline", long_about = None)]
pub struct Args {
    /// Offers endpoint URL (overrides settings.conf)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides settings.conf)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Keep the active sort order while typing a search term
    #[arg(long)]
    pub keep_sort_on_search: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Overlay command-line overrides onto settings loaded from disk.
    ///
    /// Inputs:
    /// - `settings`: Settings to update in place.
    ///
    /// Details:
    /// - `--keep-sort-on-search` can only switch the behavior on; the settings
    ///   file decides when the flag is absent.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = &self.endpoint {
            settings.endpoint_url.clone_from(url);
        }
        if let Some(secs) = self.timeout {
            settings.request_timeout = Duration::from_secs(secs);
        }
        if self.keep_sort_on_search {
            settings.keep_sort_on_search = true;
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }
}
