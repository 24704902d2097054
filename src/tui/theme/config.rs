//! Theme YAML config — load custom themes from ~/.jumble/theme.yaml.

use ratatui::style::Color;
use serde::Deserialize;

use super::Theme;

/// Intermediate YAML representation — all fields optional.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
    name: Option<String>,

    input_fg: Option<String>,
    input_line_number: Option<String>,

    output_fg: Option<String>,
    output_placeholder: Option<String>,

    option_label: Option<String>,
    option_value: Option<String>,
    option_selected: Option<String>,

    log_seq: Option<String>,
    log_message: Option<String>,

    status_fg: Option<String>,
    status_bg: Option<String>,
    status_accent: Option<String>,

    help_key: Option<String>,
    help_desc: Option<String>,

    border: Option<String>,
    border_focused: Option<String>,
    title: Option<String>,

    ok: Option<String>,
    error: Option<String>,
}

/// Parse a color string: "#RRGGBB" hex or named color.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

/// Load a custom theme from ~/.jumble/theme.yaml.
/// Returns None if the file doesn't exist or can't be parsed.
pub fn load_theme_from_yaml() -> Option<Theme> {
    let home = dirs::home_dir()?;
    let path = home.join(".jumble").join("theme.yaml");
    let content = std::fs::read_to_string(path).ok()?;
    parse_theme_yaml(&content)
}

/// Parse a YAML string into a Theme, filling missing fields from default.
fn parse_theme_yaml(yaml: &str) -> Option<Theme> {
    let config: ThemeConfig = serde_yaml::from_str(yaml).ok()?;
    let d = super::builtin::default();

    let color_or = |opt: Option<String>, fallback: Color| -> Color {
        opt.and_then(|s| parse_color(&s)).unwrap_or(fallback)
    };

    Some(Theme {
        name: config.name.unwrap_or(d.name),

        input_fg: color_or(config.input_fg, d.input_fg),
        input_line_number: color_or(config.input_line_number, d.input_line_number),

        output_fg: color_or(config.output_fg, d.output_fg),
        output_placeholder: color_or(config.output_placeholder, d.output_placeholder),

        option_label: color_or(config.option_label, d.option_label),
        option_value: color_or(config.option_value, d.option_value),
        option_selected: color_or(config.option_selected, d.option_selected),

        log_seq: color_or(config.log_seq, d.log_seq),
        log_message: color_or(config.log_message, d.log_message),

        status_fg: color_or(config.status_fg, d.status_fg),
        status_bg: color_or(config.status_bg, d.status_bg),
        status_accent: color_or(config.status_accent, d.status_accent),

        help_key: color_or(config.help_key, d.help_key),
        help_desc: color_or(config.help_desc, d.help_desc),

        border: color_or(config.border, d.border),
        border_focused: color_or(config.border_focused, d.border_focused),
        title: color_or(config.title, d.title),

        ok: color_or(config.ok, d.ok),
        error: color_or(config.error, d.error),
    })
}
