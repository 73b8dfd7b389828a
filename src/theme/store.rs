use std::fs;
use std::sync::OnceLock;

use ratatui::style::Color;

use super::parsing::{parse_color_value, split_config_line};
use super::paths::resolve_config_file;
use super::types::Theme;

/// Process-wide palette, resolved on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `theme.conf` overrides on top of the default palette.
///
/// Inputs:
/// - `content`: File content, `key = color` per line.
///
/// Output:
/// - Resulting palette and diagnostics for ignored lines.
#[must_use]
pub fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut th = Theme::default();
    let mut diags = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some(parsed) = split_config_line(line) else {
            continue;
        };
        let Ok((key, val)) = parsed else {
            diags.push(format!("line {line_no}: expected 'key = color'"));
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            diags.push(format!("line {line_no}: invalid color '{val}'"));
            continue;
        };
        let slot: Option<&mut Color> = match key.as_str() {
            "base" | "background" => Some(&mut th.base),
            "crust" => Some(&mut th.crust),
            "surface1" | "border" => Some(&mut th.surface1),
            "overlay1" | "muted" => Some(&mut th.overlay1),
            "text" => Some(&mut th.text),
            "subtext0" => Some(&mut th.subtext0),
            "sapphire" | "accent" => Some(&mut th.sapphire),
            "mauve" | "heading" => Some(&mut th.mauve),
            "green" => Some(&mut th.green),
            "yellow" => Some(&mut th.yellow),
            "red" => Some(&mut th.red),
            "lavender" | "selection" => Some(&mut th.lavender),
            _ => None,
        };
        match slot {
            Some(c) => *c = color,
            None => diags.push(format!("line {line_no}: unknown color key '{key}'")),
        }
    }
    (th, diags)
}

/// Load the palette from `theme.conf` when present.
fn load_theme() -> Theme {
    let Some(path) = resolve_config_file("theme.conf") else {
        return Theme::default();
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            let (th, diags) = parse_theme(&content);
            for d in &diags {
                tracing::warn!(path = %path.display(), "theme: {d}");
            }
            tracing::info!(path = %path.display(), "loaded theme overrides");
            th
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read theme; using defaults");
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading `theme.conf` overrides on first use.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_theme)
}
