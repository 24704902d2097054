//! TUI interface — ratatui panels: input, options, output, activity log.
//!
//! The App struct holds all TUI state and drives the event loop. Every edit
//! or option change re-runs the scrambler synchronously, so the output panel
//! always shows a permutation of what is currently typed.

pub mod activity_log;
pub mod command_bar;
pub mod help;
pub mod input;
pub mod keybindings;
pub mod layout;
pub mod options_panel;
pub mod status;
pub mod theme;

pub use activity_log::ActivityLog;
pub use command_bar::CommandBar;
pub use help::HelpScreen;
pub use input::InputBuffer;
pub use keybindings::{map_key, map_key_full, Action};
pub use layout::{AppMode, FocusPanel};
pub use options_panel::{OptionRow, OptionsPanel};
pub use status::StatusInfo;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::engine::{
    ScrambleOptions, ScrambleResult, Scrambler, SeededSource, SystemSource,
};
use crate::prefs::{self, Prefs};

/// Sample text loaded by the `:sample` command — three lines so every mode
/// has something to chew on.
const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.\n\
Pack my box with five dozen liquor jugs.\n\
Sphinx of black quartz, judge my vow!";

/// The main TUI application state.
pub struct App {
    pub input: InputBuffer,
    pub mode: AppMode,
    pub focus: FocusPanel,
    pub options_panel: OptionsPanel,
    pub activity_log: ActivityLog,
    pub status: StatusInfo,
    pub help_screen: HelpScreen,
    pub command_bar: CommandBar,
    pub scrambler: Scrambler,
    pub result: Option<ScrambleResult>,
    pub seed: Option<u64>,
    pub should_quit: bool,
    pub theme: theme::Theme,
    available_themes: Vec<theme::Theme>,
    output_scroll: usize,
    prefs_path: PathBuf,
}

impl App {
    /// Create a new App with initial input text, options, and optional seed.
    pub fn new(initial_text: &str, options: ScrambleOptions, seed: Option<u64>) -> Self {
        let scrambler = match seed {
            Some(s) => Scrambler::with_source(options, Box::new(SeededSource::new(s))),
            None => Scrambler::new(options),
        };

        let mut status = StatusInfo::default();
        status.sync_options(&options);
        status.seed = seed;

        let mut app = Self {
            input: InputBuffer::new(initial_text),
            mode: AppMode::Edit,
            focus: FocusPanel::Input,
            options_panel: OptionsPanel::default(),
            activity_log: ActivityLog::new(50),
            status,
            help_screen: HelpScreen::default(),
            command_bar: CommandBar::default(),
            scrambler,
            result: None,
            seed,
            should_quit: false,
            theme: theme::load_theme(),
            available_themes: theme::builtin::all_builtins(),
            output_scroll: 0,
            prefs_path: prefs::default_prefs_path(),
        };
        app.rescramble();
        app
    }

    /// Override where `:prefs` writes (used by tests).
    pub fn set_prefs_path(&mut self, path: PathBuf) {
        self.prefs_path = path;
    }

    /// Switch to a theme by name. Returns false if no such theme exists.
    pub fn select_theme(&mut self, name: &str) -> bool {
        match theme::find_theme(name, &self.available_themes) {
            Some(t) => {
                self.theme = t.clone();
                true
            }
            None => false,
        }
    }

    /// Re-run the scramble over the current input.
    fn rescramble(&mut self) {
        let text = self.input.content();
        if text.trim().is_empty() {
            self.result = None;
            self.status.clear_counts();
            return;
        }
        let result = self.scrambler.scramble(&text);
        self.status.sync_result(&result);
        self.result = Some(result);
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleMode => {
                self.mode = self.mode.toggle();
                self.status.is_edit_mode = self.mode == AppMode::Edit;
            }
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::Regenerate => {
                self.rescramble();
                if self.result.is_some() {
                    self.activity_log.log("regenerated");
                }
            }
            Action::CycleScrambleMode => {
                let mode = self.scrambler.options().mode.next();
                self.scrambler.options_mut().mode = mode;
                self.sync_and_rescramble();
                self.activity_log.log(format!("mode: {mode}"));
            }
            Action::SelectMode(idx) => {
                if let Some(&mode) = crate::engine::ScrambleMode::ALL.get(idx) {
                    if self.scrambler.options().mode != mode {
                        self.scrambler.options_mut().mode = mode;
                        self.sync_and_rescramble();
                        self.activity_log.log(format!("mode: {mode}"));
                    }
                }
            }
            Action::CycleIntensity => {
                let intensity = self.scrambler.options().intensity.next();
                self.scrambler.options_mut().intensity = intensity;
                self.sync_and_rescramble();
                self.activity_log.log(format!("intensity: {intensity}"));
            }
            Action::TogglePreserveSpaces => {
                let flag = !self.scrambler.options().preserve_spaces;
                self.scrambler.options_mut().preserve_spaces = flag;
                self.sync_and_rescramble();
                self.activity_log
                    .log(format!("preserve spaces: {}", on_off(flag)));
            }
            Action::TogglePreservePunctuation => {
                let flag = !self.scrambler.options().preserve_punctuation;
                self.scrambler.options_mut().preserve_punctuation = flag;
                self.sync_and_rescramble();
                self.activity_log
                    .log(format!("preserve punctuation: {}", on_off(flag)));
            }
            Action::TogglePreserveCase => {
                let flag = !self.scrambler.options().preserve_case;
                self.scrambler.options_mut().preserve_case = flag;
                self.sync_and_rescramble();
                self.activity_log
                    .log(format!("preserve case: {}", on_off(flag)));
            }
            Action::InputInsert(c) => {
                self.input.insert_char(c);
                self.rescramble();
            }
            Action::InputBackspace => {
                self.input.backspace();
                self.rescramble();
            }
            Action::InputDelete => {
                self.input.delete();
                self.rescramble();
            }
            Action::InputNewline => {
                self.input.newline();
                self.rescramble();
            }
            Action::InputLeft => self.input.move_left(),
            Action::InputRight => self.input.move_right(),
            Action::InputUp => self.input.move_up(),
            Action::InputDown => self.input.move_down(),
            Action::InputHome => self.input.home(),
            Action::InputEnd => self.input.end(),
            Action::ClearInput => {
                self.input.set_content("");
                self.rescramble();
                self.activity_log.log("input cleared");
            }
            Action::ToggleHelp => self.help_screen.toggle(),
            Action::Escape => {
                if self.help_screen.visible {
                    self.help_screen.hide();
                } else if self.focus != FocusPanel::Input {
                    self.focus = FocusPanel::Input;
                }
            }
            Action::OverlayScrollUp => self.help_screen.scroll_up(),
            Action::OverlayScrollDown => self.help_screen.scroll_down(20),
            Action::PanelNavigate(code) => match self.focus {
                FocusPanel::Options => match code {
                    KeyCode::Up => self.options_panel.select_prev(),
                    KeyCode::Down => self.options_panel.select_next(),
                    _ => {}
                },
                FocusPanel::Output => match code {
                    KeyCode::Up => self.output_scroll = self.output_scroll.saturating_sub(1),
                    KeyCode::Down => {
                        let max = self
                            .result
                            .as_ref()
                            .map(|r| r.scrambled_text.split('\n').count())
                            .unwrap_or(0);
                        if self.output_scroll + 1 < max {
                            self.output_scroll += 1;
                        }
                    }
                    _ => {}
                },
                // Input handles its own arrows; the log has no cursor.
                _ => {}
            },
            Action::OptionActivate => {
                let follow_up = match self.options_panel.selected() {
                    OptionRow::Mode => Action::CycleScrambleMode,
                    OptionRow::Intensity => Action::CycleIntensity,
                    OptionRow::PreserveSpaces => Action::TogglePreserveSpaces,
                    OptionRow::PreservePunctuation => Action::TogglePreservePunctuation,
                    OptionRow::PreserveCase => Action::TogglePreserveCase,
                };
                self.handle_action(follow_up);
            }
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.available_themes);
                self.activity_log
                    .log(format!("theme: {}", self.theme.name));
            }
            Action::ActivateCommandBar => self.command_bar.activate(),
            Action::CommandBarInsert(c) => self.command_bar.insert_char(c),
            Action::CommandBarSubmit => {
                let line = self.command_bar.submit();
                if !line.trim().is_empty() {
                    self.process_command(&line);
                }
            }
            Action::CommandBarCancel => self.command_bar.deactivate(),
            Action::CommandBarBackspace => self.command_bar.backspace(),
            Action::CommandBarLeft => self.command_bar.move_left(),
            Action::CommandBarRight => self.command_bar.move_right(),
            Action::CommandBarHistoryUp => self.command_bar.history_up(),
            Action::CommandBarHistoryDown => self.command_bar.history_down(),
        }
    }

    /// Sync option-derived status fields and re-scramble.
    fn sync_and_rescramble(&mut self) {
        let options = *self.scrambler.options();
        self.status.sync_options(&options);
        self.rescramble();
    }

    /// Process a command from the command bar.
    pub fn process_command(&mut self, line: &str) {
        let trimmed = line.trim();
        let Some(cmd) = trimmed.strip_prefix(':') else {
            self.activity_log
                .log(format!("commands start with ':' — try :help ({trimmed})"));
            return;
        };
        let cmd = cmd.trim();

        match cmd {
            "help" => self.help_screen.toggle(),
            "sample" => {
                self.input.set_content(SAMPLE_TEXT);
                self.rescramble();
                self.activity_log.log("loaded sample text");
            }
            "clear" => self.handle_action(Action::ClearInput),
            "reset" => {
                self.scrambler.set_options(ScrambleOptions::default());
                self.sync_and_rescramble();
                self.activity_log.log("options reset to defaults");
            }
            "prefs" => {
                let prefs = Prefs {
                    options: *self.scrambler.options(),
                    theme: Some(self.theme.name.clone()),
                    version: 1,
                };
                match prefs::save_prefs(&self.prefs_path, &prefs) {
                    Ok(()) => self.activity_log.log(format!(
                        "saved defaults to {}",
                        self.prefs_path.display()
                    )),
                    Err(e) => self.activity_log.log(format!("prefs error: {e}")),
                }
            }
            "seed" => {
                self.activity_log
                    .log(format!("random source: {}", self.status.seed_display()));
            }
            "themes" => {
                let names: Vec<String> = self
                    .available_themes
                    .iter()
                    .map(|t| t.name.clone())
                    .collect();
                self.activity_log
                    .log(format!("themes: {}", names.join(", ")));
            }
            _ if cmd.starts_with("seed ") => {
                let arg = cmd.strip_prefix("seed ").unwrap_or_default().trim();
                if arg == "off" {
                    self.seed = None;
                    self.status.seed = None;
                    self.scrambler.set_source(Box::new(SystemSource::new()));
                    self.activity_log.log("seed off — random source");
                } else {
                    match arg.parse::<u64>() {
                        Ok(seed) => {
                            self.seed = Some(seed);
                            self.status.seed = Some(seed);
                            self.scrambler
                                .set_source(Box::new(SeededSource::new(seed)));
                            self.rescramble();
                            self.activity_log.log(format!("seeded with {seed}"));
                        }
                        Err(_) => {
                            self.activity_log
                                .log(format!("bad seed: {arg} (use a number or 'off')"));
                        }
                    }
                }
            }
            _ if cmd.starts_with("theme ") => {
                let name = cmd.strip_prefix("theme ").unwrap_or_default().trim();
                if self.select_theme(name) {
                    self.activity_log
                        .log(format!("theme: {}", self.theme.name));
                } else {
                    self.activity_log.log(format!("theme not found: {name}"));
                }
            }
            _ if cmd.starts_with("save ") => {
                let path = cmd.strip_prefix("save ").unwrap_or_default().trim();
                match &self.result {
                    Some(result) => match std::fs::write(path, &result.scrambled_text) {
                        Ok(()) => self.activity_log.log(format!("saved output to {path}")),
                        Err(e) => self.activity_log.log(format!("save error: {e}")),
                    },
                    None => self.activity_log.log("nothing to save"),
                }
            }
            _ if cmd.starts_with("load ") => {
                let path = cmd.strip_prefix("load ").unwrap_or_default().trim();
                match std::fs::read_to_string(path) {
                    Ok(content) => {
                        self.input.set_content(&content);
                        self.rescramble();
                        self.activity_log.log(format!("loaded {path}"));
                    }
                    Err(e) => self.activity_log.log(format!("load error: {e}")),
                }
            }
            _ => {
                self.activity_log.log(format!("unknown command: :{cmd}"));
            }
        }
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Command bar needs an extra row when visible
        let cmd_bar_height = if self.command_bar.active { 1 } else { 0 };

        // Main vertical layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),         // Input + Options
                Constraint::Percentage(35),         // Output
                Constraint::Min(3),                 // Activity log
                Constraint::Length(cmd_bar_height), // Command bar (conditional)
                Constraint::Length(1),              // Status bar
            ])
            .split(size);

        // Top row: Input + Options
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[0]);

        self.draw_input(frame, top[0]);
        self.draw_options(frame, top[1]);
        self.draw_output(frame, chunks[1]);
        self.draw_activity_log(frame, chunks[2]);

        if self.command_bar.active {
            self.draw_command_bar(frame, chunks[3]);
        }

        self.draw_status(frame, chunks[4]);

        // Help overlay (rendered on top of everything)
        if self.help_screen.visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FocusPanel::Input;
        let border_style = if focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        // Inner height excludes top and bottom borders
        let inner_height = area.height.saturating_sub(2) as usize;
        self.input.set_viewport_height(inner_height);
        let scroll_offset = self.input.scroll_offset();

        let line_num_color = self.theme.input_line_number;
        let text_color = self.theme.input_fg;
        let lines: Vec<Line> = self
            .input
            .lines()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(i, line)| {
                let num =
                    Span::styled(format!("{:3} ", i + 1), Style::default().fg(line_num_color));
                let content = Span::styled(line.as_str(), Style::default().fg(text_color));
                Line::from(vec![num, content])
            })
            .collect();

        let block = Block::default()
            .title(format!(
                " Input [{}] ",
                if self.mode == AppMode::Edit {
                    "EDIT"
                } else {
                    "TUNE"
                }
            ))
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);

        // Show cursor in edit mode
        if focused && self.mode == AppMode::Edit {
            let (row, col) = self.input.cursor();
            // +1 for border, +4 for line number; adjust row by scroll_offset
            let x = area.x + 1 + 4 + col as u16;
            let y = area.y + 1 + (row - scroll_offset) as u16;
            if x < area.x + area.width && y < area.y + area.height {
                frame.set_cursor_position((x, y));
            }
        }
    }

    fn draw_options(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FocusPanel::Options;
        let border_style = if focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let options = self.scrambler.options();
        let selected = self.options_panel.selected_index();
        let theme = &self.theme;

        let mut lines: Vec<Line> = OptionRow::ALL
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let marker = if focused && i == selected { "> " } else { "  " };
                let label_style = if focused && i == selected {
                    Style::default()
                        .fg(theme.option_selected)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.option_label)
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{:<22}", row.label()), label_style),
                    Span::styled(row.value(options), Style::default().fg(theme.option_value)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", options.mode.description()),
            Style::default().fg(theme.input_line_number),
        )));

        let block = Block::default()
            .title(" Options ")
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FocusPanel::Output;
        let border_style = if focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(" Output ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = match &self.result {
            Some(result) => Paragraph::new(result.scrambled_text.as_str())
                .style(Style::default().fg(self.theme.output_fg))
                .wrap(Wrap { trim: false })
                .scroll((self.output_scroll as u16, 0)),
            None => Paragraph::new("(type to scramble)")
                .style(Style::default().fg(self.theme.output_placeholder)),
        };
        frame.render_widget(paragraph.block(block), area);
    }

    fn draw_activity_log(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == FocusPanel::ActivityLog;
        let border_style = if focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let theme = &self.theme;
        let items: Vec<ListItem> = self
            .activity_log
            .entries()
            .iter()
            .rev()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{:>3}] ", e.seq), Style::default().fg(theme.log_seq)),
                    Span::styled(e.message.as_str(), Style::default().fg(theme.log_message)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Activity ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(list, area);
    }

    fn draw_command_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let input = self.command_bar.input();
        let line = Line::from(vec![
            Span::styled(
                " > ",
                Style::default()
                    .fg(theme.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(input),
        ]);
        let paragraph =
            Paragraph::new(line).style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);

        // Show cursor in command bar
        let x = area.x + 3 + self.command_bar.cursor_pos() as u16;
        let y = area.y;
        if x < area.x + area.width {
            frame.set_cursor_position((x, y));
        }
    }

    /// Context-sensitive hint for the status bar.
    pub fn context_hint(&self) -> &str {
        if self.command_bar.active {
            return "> type a :command | Esc:cancel";
        }
        if self.help_screen.visible {
            return "?/Esc:close help  Up/Down:scroll";
        }
        match self.mode {
            AppMode::Edit => match self.focus {
                FocusPanel::Input => "Ctrl-R:regen | Ctrl-;:command | Tab:focus | Ctrl-P:tune",
                FocusPanel::Options => "Up/Down:select  Enter:change  Esc:back  ?:help",
                _ => "Tab:focus  Esc:back to input  ?:help",
            },
            AppMode::Tune => "Space:regen m:mode i:intensity s/p/c:flags 1-4:mode ?:help",
        }
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status.mode_display()),
                Style::default()
                    .fg(theme.status_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " {} | {} {} {} | {} ",
                self.status.counts_display(),
                self.status.mode,
                self.status.intensity,
                self.status.flags_display(),
                self.status.seed_display(),
            )),
            Span::styled(
                format!(" {} ", self.context_hint()),
                Style::default().fg(theme.input_line_number),
            ),
        ]);

        let paragraph =
            Paragraph::new(line).style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 70 / 100).max(50);
        let height = (area.height * 70 / 100).max(15);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(" Help — Press ? or Esc to close ");
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let lines: Vec<Line> = self
            .help_screen
            .lines()
            .iter()
            .skip(self.help_screen.scroll_offset)
            .take(inner.height as usize)
            .map(|hl| {
                let color = if hl.is_header {
                    self.theme.help_key
                } else {
                    self.theme.help_desc
                };
                Line::from(Span::styled(&hl.text, Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(50))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let is_edit = self.mode == AppMode::Edit;
                        let cmd_bar_active = self.command_bar.active;
                        let overlay_visible = self.help_screen.visible;
                        if let Some(action) = keybindings::map_key_full(
                            key,
                            is_edit,
                            self.focus,
                            cmd_bar_active,
                            overlay_visible,
                        ) {
                            self.handle_action(action);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Intensity, ScrambleMode};

    #[test]
    fn app_creation() {
        let app = App::new("", ScrambleOptions::default(), None);
        assert_eq!(app.mode, AppMode::Edit);
        assert_eq!(app.focus, FocusPanel::Input);
        assert!(!app.should_quit);
        assert!(app.result.is_none());
    }

    #[test]
    fn initial_text_is_scrambled_at_startup() {
        let app = App::new("hello world", ScrambleOptions::default(), None);
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.words_count, 2);
        assert_eq!(result.characters_count, 11);
    }

    #[test]
    fn handle_quit() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn handle_toggle_mode() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        assert_eq!(app.mode, AppMode::Edit);
        app.handle_action(Action::ToggleMode);
        assert_eq!(app.mode, AppMode::Tune);
        assert!(!app.status.is_edit_mode);
        app.handle_action(Action::ToggleMode);
        assert_eq!(app.mode, AppMode::Edit);
    }

    #[test]
    fn handle_cycle_focus() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        assert_eq!(app.focus, FocusPanel::Input);
        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, FocusPanel::Options);
    }

    #[test]
    fn typing_rescrambles_immediately() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        assert!(app.result.is_none());
        for c in "scramble this".chars() {
            app.handle_action(Action::InputInsert(c));
        }
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.original_text, "scramble this");
        assert_eq!(result.characters_count, 13);
        assert_eq!(app.status.characters_count, 13);
    }

    #[test]
    fn blank_input_clears_result() {
        let mut app = App::new("x", ScrambleOptions::default(), None);
        assert!(app.result.is_some());
        app.handle_action(Action::InputBackspace);
        assert!(app.result.is_none());
        assert_eq!(app.status.characters_count, 0);
    }

    #[test]
    fn cycle_scramble_mode_updates_options_and_result() {
        let mut app = App::new("a\nb\nc", ScrambleOptions::default(), None);
        app.handle_action(Action::CycleScrambleMode);
        assert_eq!(app.scrambler.options().mode, ScrambleMode::Words);
        assert_eq!(app.status.mode, ScrambleMode::Words);
        assert_eq!(app.result.as_ref().unwrap().mode, ScrambleMode::Words);
        assert!(!app.activity_log.is_empty());
    }

    #[test]
    fn select_mode_by_index() {
        let mut app = App::new("text", ScrambleOptions::default(), None);
        app.handle_action(Action::SelectMode(3));
        assert_eq!(app.scrambler.options().mode, ScrambleMode::Smart);
    }

    #[test]
    fn select_mode_out_of_range_no_panic() {
        let mut app = App::new("text", ScrambleOptions::default(), None);
        app.handle_action(Action::SelectMode(9));
        assert_eq!(app.scrambler.options().mode, ScrambleMode::Characters);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut app = App::new("text", ScrambleOptions::default(), None);
        app.handle_action(Action::TogglePreserveCase);
        assert!(app.scrambler.options().preserve_case);
        app.handle_action(Action::TogglePreserveCase);
        assert!(!app.scrambler.options().preserve_case);
    }

    #[test]
    fn option_activate_applies_selected_row() {
        let mut app = App::new("text", ScrambleOptions::default(), None);
        // Row 0 is Mode
        app.handle_action(Action::OptionActivate);
        assert_eq!(app.scrambler.options().mode, ScrambleMode::Words);
        // Move to Intensity and activate
        app.focus = FocusPanel::Options;
        app.handle_action(Action::PanelNavigate(KeyCode::Down));
        app.handle_action(Action::OptionActivate);
        assert_eq!(app.scrambler.options().intensity, Intensity::High);
    }

    #[test]
    fn escape_returns_focus_to_input() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.focus = FocusPanel::Output;
        app.handle_action(Action::Escape);
        assert_eq!(app.focus, FocusPanel::Input);
    }

    #[test]
    fn escape_closes_help_first() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.focus = FocusPanel::Output;
        app.handle_action(Action::ToggleHelp);
        app.handle_action(Action::Escape);
        assert!(!app.help_screen.visible);
        assert_eq!(app.focus, FocusPanel::Output); // focus untouched until next Esc
    }

    #[test]
    fn regenerate_logs_only_with_content() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.handle_action(Action::Regenerate);
        assert!(app.activity_log.is_empty());
        app.handle_action(Action::InputInsert('x'));
        app.handle_action(Action::Regenerate);
        assert_eq!(app.activity_log.len(), 1);
    }

    #[test]
    fn seeded_app_reports_seed() {
        let app = App::new("", ScrambleOptions::default(), Some(42));
        assert_eq!(app.status.seed_display(), "seed:42");
    }

    #[test]
    fn command_sample_loads_text() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.process_command(":sample");
        assert!(!app.input.is_blank());
        assert!(app.result.is_some());
        assert_eq!(app.result.as_ref().unwrap().lines_count, 3);
    }

    #[test]
    fn command_reset_restores_defaults() {
        let mut app = App::new("text", ScrambleOptions::default(), None);
        app.handle_action(Action::CycleScrambleMode);
        app.handle_action(Action::TogglePreserveCase);
        app.process_command(":reset");
        assert_eq!(*app.scrambler.options(), ScrambleOptions::default());
    }

    #[test]
    fn command_seed_switches_sources() {
        let mut app = App::new("deterministic text here", ScrambleOptions::default(), None);
        app.process_command(":seed 7");
        assert_eq!(app.seed, Some(7));
        let first = app.result.as_ref().unwrap().scrambled_text.clone();

        let mut other = App::new("deterministic text here", ScrambleOptions::default(), None);
        other.process_command(":seed 7");
        assert_eq!(other.result.as_ref().unwrap().scrambled_text, first);

        app.process_command(":seed off");
        assert_eq!(app.seed, None);
        assert_eq!(app.status.seed_display(), "rand");
    }

    #[test]
    fn command_seed_rejects_garbage() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.process_command(":seed banana");
        assert_eq!(app.seed, None);
        assert!(app
            .activity_log
            .entries()
            .last()
            .unwrap()
            .message
            .contains("bad seed"));
    }

    #[test]
    fn command_theme_switches_by_name() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.process_command(":theme catppuccin mocha");
        assert_eq!(app.theme.name, "Catppuccin Mocha");
        app.process_command(":theme nope");
        assert_eq!(app.theme.name, "Catppuccin Mocha");
    }

    #[test]
    fn command_unknown_is_logged() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.process_command(":frobnicate");
        assert!(app
            .activity_log
            .entries()
            .last()
            .unwrap()
            .message
            .contains("unknown command"));
    }

    #[test]
    fn command_save_without_result_logs() {
        let mut app = App::new("", ScrambleOptions::default(), None);
        app.process_command(":save /tmp/out.txt");
        assert!(app
            .activity_log
            .entries()
            .last()
            .unwrap()
            .message
            .contains("nothing to save"));
    }
}
