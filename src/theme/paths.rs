use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG config base.
const APP_DIR: &str = "flightdesk";

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for flightdesk without touching the filesystem.
fn config_base() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// What: Return the first existing file named `name` in the config directory.
///
/// Inputs:
/// - `name`: File name such as `settings.conf`.
///
/// Output:
/// - `Some(path)` when the file exists under `$XDG_CONFIG_HOME/flightdesk` or
///   `$HOME/.config/flightdesk` (checked in that order); `None` otherwise.
pub(crate) fn resolve_config_file(name: &str) -> Option<PathBuf> {
    let mut candidates = vec![config_base().join(name)];
    if let Ok(home) = env::var("HOME") {
        candidates.push(Path::new(&home).join(".config").join(APP_DIR).join(name));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Config directory `$XDG_CONFIG_HOME/flightdesk` (ensured to exist).
pub fn config_dir() -> PathBuf {
    let dir = config_base();
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
