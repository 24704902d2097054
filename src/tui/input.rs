//! Input buffer — the editable text pane feeding the scrambler.
//!
//! Cursor columns count characters, not bytes, so multi-byte input can never
//! split a code point.

/// A minimal multi-line text buffer with cursor and viewport scrolling.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll_offset: usize,
    viewport_height: usize,
}

/// Character count of a line.
fn width(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of character column `col` (the line end when out of range).
fn byte_at(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl InputBuffer {
    /// Create a buffer with initial content.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|l| l.to_string()).collect()
        };
        Self {
            lines,
            cursor_row: 0,
            cursor_col: 0,
            scroll_offset: 0,
            viewport_height: 20,
        }
    }

    /// Get the full text content.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Get all lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get cursor position (row, col) in character columns.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Get the current scroll offset (first visible line).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set the viewport height (number of visible lines).
    pub fn set_viewport_height(&mut self, h: usize) {
        self.viewport_height = h.max(1);
        self.ensure_cursor_visible();
    }

    /// Ensure the cursor is within the visible viewport, adjusting scroll_offset.
    fn ensure_cursor_visible(&mut self) {
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if self.cursor_row >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor_row - self.viewport_height + 1;
        }
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if self.cursor_row < self.lines.len() {
            let line = &mut self.lines[self.cursor_row];
            let col = self.cursor_col.min(width(line));
            let at = byte_at(line, col);
            line.insert(at, c);
            self.cursor_col = col + 1;
        }
    }

    /// Insert a new line at the cursor.
    pub fn newline(&mut self) {
        if self.cursor_row < self.lines.len() {
            let col = self.cursor_col.min(width(&self.lines[self.cursor_row]));
            let at = byte_at(&self.lines[self.cursor_row], col);
            let rest = self.lines[self.cursor_row][at..].to_string();
            self.lines[self.cursor_row].truncate(at);
            self.cursor_row += 1;
            self.lines.insert(self.cursor_row, rest);
            self.cursor_col = 0;
            self.ensure_cursor_visible();
        }
    }

    /// Delete character before cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let col = self.cursor_col.min(width(line));
            let at = byte_at(line, col - 1);
            line.remove(at);
            self.cursor_col = col - 1;
        } else if self.cursor_row > 0 {
            let current_line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = width(&self.lines[self.cursor_row]);
            self.lines[self.cursor_row].push_str(&current_line);
            self.ensure_cursor_visible();
        }
    }

    /// Delete character at cursor.
    pub fn delete(&mut self) {
        let line_width = width(&self.lines[self.cursor_row]);
        if self.cursor_col < line_width {
            let at = byte_at(&self.lines[self.cursor_row], self.cursor_col);
            self.lines[self.cursor_row].remove(at);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next_line = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next_line);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = width(&self.lines[self.cursor_row]);
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        let line_width = width(&self.lines[self.cursor_row]);
        if self.cursor_col < line_width {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    /// Move cursor up.
    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(width(&self.lines[self.cursor_row]));
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor down.
    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(width(&self.lines[self.cursor_row]));
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor to start of line.
    pub fn home(&mut self) {
        self.cursor_col = 0;
    }

    /// Move cursor to end of line.
    pub fn end(&mut self) {
        self.cursor_col = width(&self.lines[self.cursor_row]);
    }

    /// Replace all content.
    pub fn set_content(&mut self, content: &str) {
        self.lines = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|l| l.to_string()).collect()
        };
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_offset = 0;
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}
