//! Key bindings — maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::FocusPanel;

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle between Edit and Tune modes.
    ToggleMode,
    /// Cycle focus to the next panel.
    CycleFocus,
    /// Re-run the scramble with identical text and options.
    Regenerate,
    /// Cycle the scramble mode.
    CycleScrambleMode,
    /// Cycle the shuffle intensity.
    CycleIntensity,
    /// Toggle the preserve-spaces flag.
    TogglePreserveSpaces,
    /// Toggle the preserve-punctuation flag.
    TogglePreservePunctuation,
    /// Toggle the preserve-case flag.
    TogglePreserveCase,
    /// Select a scramble mode by index (0-indexed).
    SelectMode(usize),
    /// Insert a character in the input buffer.
    InputInsert(char),
    /// Delete character before cursor.
    InputBackspace,
    /// Delete character at cursor.
    InputDelete,
    /// Move cursor in the input buffer.
    InputLeft,
    InputRight,
    InputUp,
    InputDown,
    /// New line in the input buffer.
    InputNewline,
    /// Navigate to start/end of line.
    InputHome,
    InputEnd,
    /// Clear the input buffer.
    ClearInput,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape key (close overlays, return to input focus).
    Escape,
    /// Scroll the visible overlay.
    OverlayScrollUp,
    OverlayScrollDown,
    /// Navigate within a non-input panel (arrow keys).
    PanelNavigate(KeyCode),
    /// Cycle/toggle the selected options-panel row.
    OptionActivate,
    /// Cycle to the next theme.
    CycleTheme,
    /// Activate the command bar (Ctrl+;).
    ActivateCommandBar,
    /// Insert a character in the command bar.
    CommandBarInsert(char),
    /// Submit the command bar input.
    CommandBarSubmit,
    /// Cancel the command bar.
    CommandBarCancel,
    /// Backspace in the command bar.
    CommandBarBackspace,
    /// Move cursor left in command bar.
    CommandBarLeft,
    /// Move cursor right in command bar.
    CommandBarRight,
    /// Navigate command bar history up.
    CommandBarHistoryUp,
    /// Navigate command bar history down.
    CommandBarHistoryDown,
}

/// Map a key event to an application action based on the current mode.
/// Convenience wrapper that defaults to Input focus and no overlays.
pub fn map_key(key: KeyEvent, is_edit_mode: bool) -> Option<Action> {
    map_key_full(key, is_edit_mode, FocusPanel::Input, false, false)
}

/// Full key mapping with focus, command bar, and overlay awareness.
/// Input-buffer actions only fire when `focus == FocusPanel::Input`.
pub fn map_key_full(
    key: KeyEvent,
    is_edit_mode: bool,
    focus: FocusPanel,
    command_bar_active: bool,
    overlay_visible: bool,
) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Overlay (help) intercepts keys when visible
    if overlay_visible {
        if ctrl && key.code == KeyCode::Char('q') {
            return Some(Action::Quit);
        }
        return match key.code {
            KeyCode::Up => Some(Action::OverlayScrollUp),
            KeyCode::Down => Some(Action::OverlayScrollDown),
            KeyCode::Esc => Some(Action::Escape),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    // Command bar mode intercepts almost all keys
    if command_bar_active {
        if ctrl && key.code == KeyCode::Char('q') {
            return Some(Action::Quit);
        }
        return match key.code {
            KeyCode::Enter => Some(Action::CommandBarSubmit),
            KeyCode::Esc => Some(Action::CommandBarCancel),
            KeyCode::Backspace => Some(Action::CommandBarBackspace),
            KeyCode::Left => Some(Action::CommandBarLeft),
            KeyCode::Right => Some(Action::CommandBarRight),
            KeyCode::Up => Some(Action::CommandBarHistoryUp),
            KeyCode::Down => Some(Action::CommandBarHistoryDown),
            KeyCode::Char(c) => Some(Action::CommandBarInsert(c)),
            _ => None,
        };
    }

    // Global bindings (both modes, all panels)
    if ctrl {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Regenerate),
            KeyCode::Char('p') => Some(Action::ToggleMode),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('k') => Some(Action::ClearInput),
            KeyCode::Char(';') => Some(Action::ActivateCommandBar),
            _ => None,
        };
    }

    // Help toggle (? key) — available everywhere except the input buffer in
    // edit mode, where it types a question mark.
    if key.code == KeyCode::Char('?') && !(is_edit_mode && focus == FocusPanel::Input) {
        return Some(Action::ToggleHelp);
    }

    match key.code {
        KeyCode::Tab => return Some(Action::CycleFocus),
        KeyCode::Esc => return Some(Action::Escape),
        _ => {}
    }

    if is_edit_mode && focus == FocusPanel::Input {
        // Input bindings — ONLY when the input panel has focus
        match key.code {
            KeyCode::Char(c) => Some(Action::InputInsert(c)),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Delete => Some(Action::InputDelete),
            KeyCode::Enter => Some(Action::InputNewline),
            KeyCode::Left => Some(Action::InputLeft),
            KeyCode::Right => Some(Action::InputRight),
            KeyCode::Up => Some(Action::InputUp),
            KeyCode::Down => Some(Action::InputDown),
            KeyCode::Home => Some(Action::InputHome),
            KeyCode::End => Some(Action::InputEnd),
            _ => None,
        }
    } else if is_edit_mode {
        // Edit mode but non-input panel: navigation and activation only
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Action::PanelNavigate(key.code))
            }
            KeyCode::Enter if focus == FocusPanel::Options => Some(Action::OptionActivate),
            _ => None,
        }
    } else {
        // Tune mode bindings (available regardless of focus)
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::Regenerate),
            KeyCode::Char('m') => Some(Action::CycleScrambleMode),
            KeyCode::Char('i') => Some(Action::CycleIntensity),
            KeyCode::Char('s') => Some(Action::TogglePreserveSpaces),
            KeyCode::Char('p') => Some(Action::TogglePreservePunctuation),
            KeyCode::Char('c') => Some(Action::TogglePreserveCase),
            KeyCode::Char('1') => Some(Action::SelectMode(0)),
            KeyCode::Char('2') => Some(Action::SelectMode(1)),
            KeyCode::Char('3') => Some(Action::SelectMode(2)),
            KeyCode::Char('4') => Some(Action::SelectMode(3)),
            KeyCode::Up | KeyCode::Down => Some(Action::PanelNavigate(key.code)),
            KeyCode::Enter if focus == FocusPanel::Options => Some(Action::OptionActivate),
            _ => None,
        }
    }
}
