use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::theme::parsing::{parse_bool, split_config_line};
use crate::theme::paths::resolve_config_file;
use crate::theme::types::Settings;

/// What: Parse `settings.conf` content on top of the defaults.
///
/// Inputs:
/// - `content`: File content, `key = value` per line.
///
/// Output:
/// - Parsed `Settings` and a list of human-readable diagnostics for lines that
///   were ignored.
///
/// Details:
/// - Recognized keys: `endpoint_url` (alias `endpoint`), `request_timeout_secs`
///   (alias `timeout_secs`, must be > 0), `keep_sort_on_search`.
/// - Invalid values keep the default for that key.
#[must_use]
pub fn parse_settings(content: &str) -> (Settings, Vec<String>) {
    let mut out = Settings::default();
    let mut diags = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some(parsed) = split_config_line(line) else {
            continue;
        };
        let Ok((key, val)) = parsed else {
            diags.push(format!("line {line_no}: expected 'key = value'"));
            continue;
        };
        match key.as_str() {
            "endpoint_url" | "endpoint" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    out.endpoint_url = val.to_string();
                } else {
                    diags.push(format!("line {line_no}: endpoint must be an http(s) URL"));
                }
            }
            "request_timeout_secs" | "timeout_secs" => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => out.request_timeout = Duration::from_secs(secs),
                _ => diags.push(format!(
                    "line {line_no}: timeout must be a positive number of seconds"
                )),
            },
            "keep_sort_on_search" => match parse_bool(val) {
                Some(b) => out.keep_sort_on_search = b,
                None => diags.push(format!("line {line_no}: expected a boolean for {key}")),
            },
            _ => diags.push(format!("line {line_no}: unknown key '{key}'")),
        }
    }
    (out, diags)
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (settings, diags) = parse_settings(&content);
            for d in &diags {
                warn!(path = %path.display(), "settings: {d}");
            }
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Load user settings from `settings.conf` in the config directory.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is missing.
#[must_use]
pub fn settings() -> Settings {
    resolve_config_file("settings.conf").map_or_else(
        || {
            debug!("no settings.conf found; using defaults");
            Settings::default()
        },
        |p| load_settings_from(&p),
    )
}
