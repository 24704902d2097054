//! Built-in themes — three color schemes shipped with Jumble.

use ratatui::style::Color;

use super::Theme;

/// Default theme — plain terminal colors.
pub fn default() -> Theme {
    Theme {
        name: "Default".to_string(),

        input_fg: Color::White,
        input_line_number: Color::DarkGray,

        output_fg: Color::Cyan,
        output_placeholder: Color::DarkGray,

        option_label: Color::White,
        option_value: Color::Yellow,
        option_selected: Color::Cyan,

        log_seq: Color::DarkGray,
        log_message: Color::White,

        status_fg: Color::White,
        status_bg: Color::DarkGray,
        status_accent: Color::Cyan,

        help_key: Color::Yellow,
        help_desc: Color::White,

        border: Color::White,
        border_focused: Color::Cyan,
        title: Color::Cyan,

        ok: Color::Green,
        error: Color::Red,
    }
}

/// Catppuccin Mocha — pastel colors on a dark background.
pub fn catppuccin_mocha() -> Theme {
    Theme {
        name: "Catppuccin Mocha".to_string(),

        input_fg: Color::Rgb(205, 214, 244),          // text
        input_line_number: Color::Rgb(88, 91, 112),   // surface2

        output_fg: Color::Rgb(148, 226, 213),         // teal
        output_placeholder: Color::Rgb(88, 91, 112),

        option_label: Color::Rgb(205, 214, 244),
        option_value: Color::Rgb(249, 226, 175),      // yellow
        option_selected: Color::Rgb(137, 180, 250),   // blue

        log_seq: Color::Rgb(88, 91, 112),
        log_message: Color::Rgb(205, 214, 244),

        status_fg: Color::Rgb(205, 214, 244),
        status_bg: Color::Rgb(49, 50, 68),            // surface0
        status_accent: Color::Rgb(137, 180, 250),

        help_key: Color::Rgb(249, 226, 175),
        help_desc: Color::Rgb(205, 214, 244),

        border: Color::Rgb(108, 112, 134),            // overlay0
        border_focused: Color::Rgb(137, 180, 250),
        title: Color::Rgb(137, 180, 250),

        ok: Color::Rgb(166, 227, 161),                // green
        error: Color::Rgb(243, 139, 168),             // red
    }
}

/// Solarized Light — muted colors on a light background.
pub fn solarized_light() -> Theme {
    Theme {
        name: "Solarized Light".to_string(),

        input_fg: Color::Rgb(101, 123, 131),          // base00
        input_line_number: Color::Rgb(147, 161, 161), // base1

        output_fg: Color::Rgb(42, 161, 152),          // cyan
        output_placeholder: Color::Rgb(147, 161, 161),

        option_label: Color::Rgb(101, 123, 131),
        option_value: Color::Rgb(181, 137, 0),        // yellow
        option_selected: Color::Rgb(38, 139, 210),    // blue

        log_seq: Color::Rgb(147, 161, 161),
        log_message: Color::Rgb(101, 123, 131),

        status_fg: Color::Rgb(253, 246, 227),         // base3
        status_bg: Color::Rgb(101, 123, 131),
        status_accent: Color::Rgb(38, 139, 210),

        help_key: Color::Rgb(181, 137, 0),
        help_desc: Color::Rgb(101, 123, 131),

        border: Color::Rgb(147, 161, 161),
        border_focused: Color::Rgb(38, 139, 210),
        title: Color::Rgb(38, 139, 210),

        ok: Color::Rgb(133, 153, 0),                  // green
        error: Color::Rgb(220, 50, 47),               // red
    }
}

/// All built-in themes, in cycle order.
pub fn all_builtins() -> Vec<Theme> {
    vec![default(), catppuccin_mocha(), solarized_light()]
}
