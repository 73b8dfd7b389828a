//! Theme palette, configuration paths and user settings.
//!
//! Both config files use the same `key = value` line format with `#` comments:
//! `settings.conf` for behavior and `theme.conf` for color overrides. Missing
//! files are not an error; defaults apply.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Palette store.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::{parse_theme, theme};
pub use types::{Settings, Theme};
