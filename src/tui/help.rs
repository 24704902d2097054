//! Help screen — modal overlay showing keybinding reference.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

/// Help screen state.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    pub scroll_offset: usize,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    /// Create a new help screen with the full keybinding reference.
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll_offset: 0,
            content: Self::build_content(),
        }
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.scroll_offset = 0;
        }
    }

    /// Hide the help screen.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Scroll up.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down.
    pub fn scroll_down(&mut self, max_visible: usize) {
        let max_scroll = self.content.len().saturating_sub(max_visible);
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Get all help lines.
    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let mut lines = Vec::new();

        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        lines.push(h("GLOBAL (all modes, all panels)"));
        lines.push(l("  Ctrl-Q       Quit"));
        lines.push(l("  Ctrl-R       Regenerate scramble"));
        lines.push(l("  Ctrl-P       Toggle Edit/Tune mode"));
        lines.push(l("  Ctrl-;       Open command bar"));
        lines.push(l("  Ctrl-K       Clear input"));
        lines.push(l("  Ctrl-T       Cycle theme"));
        lines.push(l("  Tab          Cycle panel focus"));
        lines.push(l("  Esc          Close overlay / back to input"));
        lines.push(l("  ?            Toggle this help screen"));
        lines.push(l(""));

        lines.push(h("EDIT MODE (input panel focused)"));
        lines.push(l("  Any key      Insert character"));
        lines.push(l("  Backspace    Delete before cursor"));
        lines.push(l("  Delete       Delete at cursor"));
        lines.push(l("  Enter        New line"));
        lines.push(l("  Arrows       Move cursor"));
        lines.push(l("  Home/End     Start/end of line"));
        lines.push(l(""));

        lines.push(h("TUNE MODE"));
        lines.push(l("  Space/r      Regenerate scramble"));
        lines.push(l("  m            Cycle scramble mode"));
        lines.push(l("  i            Cycle intensity"));
        lines.push(l("  s            Toggle preserve spaces"));
        lines.push(l("  p            Toggle preserve punctuation"));
        lines.push(l("  c            Toggle preserve case"));
        lines.push(l("  1-4          Select mode directly"));
        lines.push(l(""));

        lines.push(h("OPTIONS PANEL (focused)"));
        lines.push(l("  Up/Down      Select a setting"));
        lines.push(l("  Enter        Cycle/toggle the setting"));
        lines.push(l(""));

        lines.push(h("COMMAND BAR"));
        lines.push(l("  :load PATH   Load input from a file"));
        lines.push(l("  :save PATH   Save scrambled output to a file"));
        lines.push(l("  :sample      Load sample text"));
        lines.push(l("  :clear       Clear the input"));
        lines.push(l("  :reset       Reset options to defaults"));
        lines.push(l("  :seed N      Seed the RNG (:seed off to unseed)"));
        lines.push(l("  :theme NAME  Switch theme"));
        lines.push(l("  :prefs       Save current options as defaults"));
        lines.push(l("  :help        Toggle help screen"));
        lines.push(l(""));

        lines.push(h("TIPS"));
        lines.push(l("  - Output re-scrambles on every keystroke"));
        lines.push(l("  - Ctrl-R rolls a fresh permutation of the same text"));
        lines.push(l("  - Smart mode keeps first/last letters readable"));
        lines.push(l("  - Keys only edit when the Input panel is focused"));

        lines
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hidden() {
        let help = HelpScreen::new();
        assert!(!help.visible);
        assert_eq!(help.scroll_offset, 0);
    }

    #[test]
    fn toggle_shows_and_hides() {
        let mut help = HelpScreen::new();
        help.toggle();
        assert!(help.visible);
        help.toggle();
        assert!(!help.visible);
    }

    #[test]
    fn toggle_resets_scroll() {
        let mut help = HelpScreen::new();
        help.toggle();
        help.scroll_down(5);
        assert!(help.scroll_offset > 0);
        help.hide();
        help.toggle(); // show again
        assert_eq!(help.scroll_offset, 0);
    }

    #[test]
    fn content_not_empty() {
        let help = HelpScreen::new();
        assert!(!help.lines().is_empty());
    }

    #[test]
    fn has_section_headers() {
        let help = HelpScreen::new();
        let headers: Vec<_> = help.lines().iter().filter(|l| l.is_header).collect();
        assert!(headers.len() >= 5);
    }

    #[test]
    fn scroll_bounds() {
        let mut help = HelpScreen::new();
        help.scroll_up(); // should not underflow
        assert_eq!(help.scroll_offset, 0);

        for _ in 0..200 {
            help.scroll_down(10);
        }
        assert!(help.scroll_offset <= help.lines().len());
    }
}
