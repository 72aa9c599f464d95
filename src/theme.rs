// Theme support for the TUI
//
// Provides color palettes that can be configured via config file or from the
// settings form. "auto" uses terminal's ANSI palette, named themes use true
// color (RGB).

use ratatui::style::Color;

use crate::logging::LogLevel;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,

    // Widgets
    pub button: Color,
    pub button_focus: Color,
    pub field_value: Color,

    // Feedback
    pub ok: Color,
    pub warn: Color,
    pub error: Color,
}

impl Theme {
    /// Names accepted by [`Theme::by_name`], in display order
    pub fn available() -> [&'static str; 4] {
        ["auto", "dracula", "nord", "gruvbox"]
    }

    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
            button: Color::Cyan,
            button_focus: Color::Yellow,
            field_value: Color::Magenta,
            ok: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            muted: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            button: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            button_focus: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            field_value: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            ok: Color::Rgb(0x50, 0xfa, 0x7b),         // green
            warn: Color::Rgb(0xff, 0xb8, 0x6c),       // orange
            error: Color::Rgb(0xff, 0x55, 0x55),      // red
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            muted: Color::Rgb(0x4c, 0x56, 0x6a),      // polar night
            button: Color::Rgb(0x88, 0xc0, 0xd0),     // frost cyan
            button_focus: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            field_value: Color::Rgb(0xb4, 0x8e, 0xad), // aurora purple
            ok: Color::Rgb(0xa3, 0xbe, 0x8c),         // aurora green
            warn: Color::Rgb(0xd0, 0x87, 0x70),       // aurora orange
            error: Color::Rgb(0xbf, 0x61, 0x6a),      // aurora red
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(0x83, 0xa5, 0x98),      // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),     // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),  // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            muted: Color::Rgb(0x92, 0x83, 0x74),      // gray
            button: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            button_focus: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            field_value: Color::Rgb(0xd3, 0x86, 0x9b), // purple
            ok: Color::Rgb(0xb8, 0xbb, 0x26),         // green
            warn: Color::Rgb(0xfe, 0x80, 0x19),       // orange
            error: Color::Rgb(0xfb, 0x49, 0x34),      // red
        }
    }
}

impl Theme {
    /// Get border color for a grid cell based on focus state
    pub fn cell_border(&self, focused: bool) -> Color {
        if focused {
            self.button_focus
        } else {
            self.border
        }
    }

    /// Display color for a captured log level
    pub fn level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.error,
            LogLevel::Warn => self.warn,
            LogLevel::Info => self.ok,
            LogLevel::Debug | LogLevel::Trace => self.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
