use std::time::Duration;

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// Defaults follow the Catppuccin Mocha palette; individual colors can be
/// overridden in `theme.conf`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Border color of unfocused panels.
    pub surface1: Color,
    /// Muted captions and the search placeholder.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text.
    pub subtext0: Color,
    /// Interactive accent (search prompt, sortable headers).
    pub sapphire: Color,
    /// Heading accent.
    pub mauve: Color,
    /// Prices and the Add Booking button.
    pub green: Color,
    /// Active sort column and spinner.
    pub yellow: Color,
    /// Empty state message.
    pub red: Color,
    /// Selected row background.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Offers endpoint URL.
    pub endpoint_url: String,
    /// Whole-request timeout for the offers fetch.
    pub request_timeout: Duration,
    /// Re-apply the active sort key after each search edit.
    pub keep_sort_on_search: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: crate::sources::DEFAULT_OFFERS_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            keep_sort_on_search: false,
        }
    }
}
