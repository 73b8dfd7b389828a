use ratatui::style::Color;

/// What: Strip a trailing `# ...` or `// ...` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A comment marker only counts when preceded by whitespace, so URLs
///   (`https://...#frag`) and hex colors (`#1e1e2e`) survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let t = s.trim();
    let cut = [" #", "\t#", " //", "\t//"]
        .iter()
        .filter_map(|m| t.find(m))
        .min();
    cut.map_or(t, |i| &t[..i]).trim()
}

/// What: Split a config line into a normalized key and its value.
///
/// Inputs:
/// - `line`: One line of a `key = value` config file.
///
/// Output:
/// - `None` for blank lines and comments; `Some(Err(()))` for lines without `=`
///   or with an empty key; `Some(Ok((key, value)))` otherwise. Keys are lowercased
///   with `.`, `-` and spaces folded to `_`.
pub(crate) fn split_config_line(line: &str) -> Option<Result<(String, &str), ()>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
        return Some(Err(()));
    };
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return Some(Err(()));
    }
    Some(Ok((key, strip_inline_comment(raw_val))))
}

/// Parse `true/false`, `1/0`, `yes/no`, `on/off`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse a color value as `#RRGGBB`, `RRGGBB` or `R,G,B`.
///
/// Inputs:
/// - `s`: Value text (inline comments already stripped or not).
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` for anything else.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}
