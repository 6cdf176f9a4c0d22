//! Single-line editing buffer shared by text and date fields

/// Editable text with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    /// Current content
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
}

impl TextBuffer {
    /// Buffer holding `content` with the cursor at the end
    #[must_use]
    pub fn with_content(content: &str) -> Self {
        Self {
            buffer: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    /// Byte index of the cursor
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = self.byte_index();
        let prev_byte_idx = self.buffer[..byte_idx]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.buffer.remove(prev_byte_idx);
        self.cursor -= 1;
        true
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) -> bool {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear word backwards (Ctrl+W)
    pub fn delete_word_backwards(&mut self) -> bool {
        let byte_idx = self.byte_index();
        if byte_idx == 0 {
            return false;
        }
        let trimmed = self.buffer[..byte_idx].trim_end();
        let new_end = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, space)| i + space.len_utf8());

        self.buffer.drain(new_end..byte_idx);
        self.cursor = self.buffer[..new_end].chars().count();
        true
    }

    /// Clear the input (Ctrl+U)
    pub fn clear(&mut self) -> bool {
        let changed = !self.buffer.is_empty();
        self.buffer.clear();
        self.cursor = 0;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor_moves() {
        let mut input = TextBuffer::default();
        for c in "Jne".chars() {
            input.insert_char(c);
        }
        input.cursor_left();
        input.cursor_left();
        input.insert_char('a');
        assert_eq!(input.buffer, "Jane");
        assert_eq!(input.cursor, 2);

        input.cursor_end();
        assert_eq!(input.cursor, 4);
        input.cursor_right();
        assert_eq!(input.cursor, 4);
        input.cursor_home();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut input = TextBuffer::with_content("Zoë");
        assert!(input.backspace());
        assert_eq!(input.buffer, "Zo");

        input.cursor_home();
        assert!(input.delete());
        assert_eq!(input.buffer, "o");
        assert!(!TextBuffer::default().backspace());
    }

    #[test]
    fn test_delete_word_backwards() {
        let mut input = TextBuffer::with_content("Mary Ann");
        assert!(input.delete_word_backwards());
        assert_eq!(input.buffer, "Mary ");
        assert!(input.delete_word_backwards());
        assert_eq!(input.buffer, "");
        assert!(!input.delete_word_backwards());
    }

    #[test]
    fn test_delete_word_backwards_after_wide_space() {
        let mut input = TextBuffer::with_content("Mary\u{a0}Ann");
        assert!(input.delete_word_backwards());
        assert_eq!(input.buffer, "Mary\u{a0}");
        assert_eq!(input.cursor, 5);
        assert!(input.delete_word_backwards());
        assert_eq!(input.buffer, "");

        let mut input = TextBuffer::with_content("山田\u{3000}太郎");
        assert!(input.delete_word_backwards());
        assert_eq!(input.buffer, "山田\u{3000}");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_clear() {
        let mut input = TextBuffer::with_content("x");
        assert!(input.clear());
        assert!(input.is_empty());
        assert!(!input.clear());
    }
}
