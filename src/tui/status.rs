//! Status bar — mode, intensity, live counts, and seed indicator.

use crate::engine::{Intensity, ScrambleMode, ScrambleOptions, ScrambleResult};

/// Status information for the TUI status bar.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub mode: ScrambleMode,
    pub intensity: Intensity,
    pub preserve_spaces: bool,
    pub preserve_punctuation: bool,
    pub preserve_case: bool,
    pub words_count: usize,
    pub characters_count: usize,
    pub lines_count: usize,
    pub seed: Option<u64>,
    pub is_edit_mode: bool,
}

impl StatusInfo {
    /// Format the live counts as "Nw Nc Nl".
    pub fn counts_display(&self) -> String {
        format!(
            "{}w {}c {}l",
            self.words_count, self.characters_count, self.lines_count
        )
    }

    /// Format the app mode indicator.
    pub fn mode_display(&self) -> &str {
        if self.is_edit_mode {
            "EDIT"
        } else {
            "TUNE"
        }
    }

    /// Compact preserve-flag summary: space, punctuation, case.
    pub fn flags_display(&self) -> String {
        let mark = |on: bool, c: char| if on { c } else { '-' };
        format!(
            "[{}{}{}]",
            mark(self.preserve_spaces, 's'),
            mark(self.preserve_punctuation, 'p'),
            mark(self.preserve_case, 'c'),
        )
    }

    /// Seed indicator: "seed:N" or "rand".
    pub fn seed_display(&self) -> String {
        match self.seed {
            Some(seed) => format!("seed:{seed}"),
            None => "rand".to_string(),
        }
    }

    /// Pull mode/intensity/flags from the current options.
    pub fn sync_options(&mut self, options: &ScrambleOptions) {
        self.mode = options.mode;
        self.intensity = options.intensity;
        self.preserve_spaces = options.preserve_spaces;
        self.preserve_punctuation = options.preserve_punctuation;
        self.preserve_case = options.preserve_case;
    }

    /// Pull counts from the latest result.
    pub fn sync_result(&mut self, result: &ScrambleResult) {
        self.words_count = result.words_count;
        self.characters_count = result.characters_count;
        self.lines_count = result.lines_count;
    }

    /// Zero the counts (empty input).
    pub fn clear_counts(&mut self) {
        self.words_count = 0;
        self.characters_count = 0;
        self.lines_count = 0;
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        let options = ScrambleOptions::default();
        Self {
            mode: options.mode,
            intensity: options.intensity,
            preserve_spaces: options.preserve_spaces,
            preserve_punctuation: options.preserve_punctuation,
            preserve_case: options.preserve_case,
            words_count: 0,
            characters_count: 0,
            lines_count: 0,
            seed: None,
            is_edit_mode: true,
        }
    }
}
