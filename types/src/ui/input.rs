//! Single-line text buffer backing a form field.

use unicode_segmentation::UnicodeSegmentation;

/// Handles text editing with proper Unicode grapheme cluster support.
///
/// The cursor is a grapheme index, never a byte offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Insert a character at the cursor. Control characters are dropped so a
    /// field never holds a line break or escape byte.
    pub fn enter_char(&mut self, new_char: char) {
        if new_char.is_control() {
            return;
        }
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.cursor = self.graphemes_before(index + new_char.len_utf8());
    }

    /// Insert pasted text at the cursor, minus any control characters.
    pub fn enter_text(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
        if cleaned.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, &cleaned);
        self.cursor = self.graphemes_before(index + cleaned.len());
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete trailing whitespace before the cursor, then the word before it.
    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.enter_text(text);
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    /// Graphemes wholly before `byte_end`. An inserted combining mark merges
    /// into its predecessor, so this can be less than the inserted char count.
    fn graphemes_before(&self, byte_end: usize) -> usize {
        self.text[..byte_end].graphemes(true).count()
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}
