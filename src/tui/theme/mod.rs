//! Theme system — configurable color schemes for the TUI.

pub mod builtin;
pub mod config;

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Input panel
    pub input_fg: Color,
    pub input_line_number: Color,

    // Output panel
    pub output_fg: Color,
    pub output_placeholder: Color,

    // Options panel
    pub option_label: Color,
    pub option_value: Color,
    pub option_selected: Color,

    // Activity log
    pub log_seq: Color,
    pub log_message: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub status_accent: Color,

    // Help
    pub help_key: Color,
    pub help_desc: Color,

    // Borders & chrome
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,

    // Feedback
    pub ok: Color,
    pub error: Color,
}

/// Load a theme: tries YAML config first, falls back to the default builtin.
pub fn load_theme() -> Theme {
    config::load_theme_from_yaml().unwrap_or_else(builtin::default)
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}

/// Find a theme by name, case-insensitively.
pub fn find_theme<'a>(name: &str, themes: &'a [Theme]) -> Option<&'a Theme> {
    themes
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_a_name() {
        let theme = builtin::default();
        assert_eq!(theme.name, "Default");
    }

    #[test]
    fn load_theme_returns_default_without_yaml() {
        let theme = load_theme();
        assert!(!theme.name.is_empty());
    }

    #[test]
    fn cycle_single_theme_stays() {
        let theme = builtin::default();
        let themes = vec![theme.clone()];
        let next = cycle_theme(&theme, &themes);
        assert_eq!(next.name, theme.name);
    }

    #[test]
    fn cycle_wraps_around() {
        let themes = builtin::all_builtins();
        assert!(themes.len() >= 2);
        let last = &themes[themes.len() - 1];
        let next = cycle_theme(last, &themes);
        assert_eq!(next.name, themes[0].name);
    }

    #[test]
    fn cycle_advances_to_next() {
        let themes = builtin::all_builtins();
        let next = cycle_theme(&themes[0], &themes);
        assert_eq!(next.name, themes[1].name);
    }

    #[test]
    fn cycle_empty_themes_returns_current() {
        let theme = builtin::default();
        let next = cycle_theme(&theme, &[]);
        assert_eq!(next.name, theme.name);
    }

    #[test]
    fn find_theme_is_case_insensitive() {
        let themes = builtin::all_builtins();
        assert!(find_theme("default", &themes).is_some());
        assert!(find_theme("  DEFAULT ", &themes).is_some());
        assert!(find_theme("no such theme", &themes).is_none());
    }
}
