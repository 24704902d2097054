//! Options panel — selectable list of scramble settings.

use crate::engine::ScrambleOptions;

/// Rows shown in the options panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow {
    Mode,
    Intensity,
    PreserveSpaces,
    PreservePunctuation,
    PreserveCase,
}

impl OptionRow {
    pub const ALL: [OptionRow; 5] = [
        Self::Mode,
        Self::Intensity,
        Self::PreserveSpaces,
        Self::PreservePunctuation,
        Self::PreserveCase,
    ];

    /// Display label for this row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mode => "Mode",
            Self::Intensity => "Intensity",
            Self::PreserveSpaces => "Preserve spaces",
            Self::PreservePunctuation => "Preserve punctuation",
            Self::PreserveCase => "Preserve case",
        }
    }

    /// Current value rendered for display.
    pub fn value(self, options: &ScrambleOptions) -> String {
        fn on_off(v: bool) -> String {
            if v { "on" } else { "off" }.to_string()
        }
        match self {
            Self::Mode => options.mode.to_string(),
            Self::Intensity => options.intensity.to_string(),
            Self::PreserveSpaces => on_off(options.preserve_spaces),
            Self::PreservePunctuation => on_off(options.preserve_punctuation),
            Self::PreserveCase => on_off(options.preserve_case),
        }
    }
}

/// Selection state for the options panel.
#[derive(Debug, Clone, Default)]
pub struct OptionsPanel {
    selected: usize,
}

impl OptionsPanel {
    /// The currently selected row.
    pub fn selected(&self) -> OptionRow {
        OptionRow::ALL[self.selected]
    }

    /// Index of the selected row.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the selection down, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % OptionRow::ALL.len();
    }

    /// Move the selection up, wrapping.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + OptionRow::ALL.len() - 1) % OptionRow::ALL.len();
    }
}
