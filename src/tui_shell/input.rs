/// Single-line text entry. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

fn byte_at(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

impl Input {
    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    pub(super) fn set(&mut self, s: String) {
        self.cursor = s.chars().count();
        self.buf = s;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = byte_at(&self.buf, self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = byte_at(&self.buf, self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.chars().count() {
            return;
        }
        let at = byte_at(&self.buf, self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buf.chars().count());
    }
}

/// Cursor over a multi-line buffer owned elsewhere (the detail panel's edit
/// buffer). Positions are char offsets into the whole text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Editor {
    pub(super) cursor: usize,
}

impl Editor {
    pub(super) fn at_end(buf: &str) -> Self {
        Self {
            cursor: buf.chars().count(),
        }
    }

    fn clamp(&mut self, buf: &str) {
        self.cursor = self.cursor.min(buf.chars().count());
    }

    pub(super) fn insert_char(&mut self, buf: &mut String, c: char) {
        self.clamp(buf);
        let at = byte_at(buf, self.cursor);
        buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self, buf: &mut String) {
        self.clamp(buf);
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = byte_at(buf, self.cursor);
        buf.remove(at);
    }

    pub(super) fn delete(&mut self, buf: &mut String) {
        self.clamp(buf);
        if self.cursor < buf.chars().count() {
            let at = byte_at(buf, self.cursor);
            buf.remove(at);
        }
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self, buf: &str) {
        self.cursor = (self.cursor + 1).min(buf.chars().count());
    }

    /// (line, column) of the cursor, both zero-based.
    pub(super) fn position(&self, buf: &str) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in buf.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    fn offset_of(buf: &str, line: usize, col: usize) -> usize {
        let mut offset = 0;
        for (i, text) in buf.split('\n').enumerate() {
            let len = text.chars().count();
            if i == line {
                return offset + col.min(len);
            }
            offset += len + 1;
        }
        buf.chars().count()
    }

    pub(super) fn move_up(&mut self, buf: &str) {
        let (line, col) = self.position(buf);
        if line > 0 {
            self.cursor = Self::offset_of(buf, line - 1, col);
        }
    }

    pub(super) fn move_down(&mut self, buf: &str) {
        let (line, col) = self.position(buf);
        if line + 1 < buf.split('\n').count() {
            self.cursor = Self::offset_of(buf, line + 1, col);
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
