//! Single-line search input.
//!
//! Every edit reports one [`TextChange`] so the checklist refilters through
//! a single path no matter how the text changed.

use checklist::{QueryReadError, QuerySource, TextChange};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text and cursor of the search field. The cursor is a byte offset.
#[derive(Debug, Clone, Default)]
pub struct SearchField {
    text: String,
    cursor: usize,
}

impl SearchField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Part of the text to draw in a field `width` columns wide.
    ///
    /// Returns the byte offset to start drawing from and the cursor's
    /// display column relative to it. Leading chars are dropped until the
    /// cursor fits.
    pub fn window(&self, width: usize) -> (usize, usize) {
        let before = self.text.get(..self.cursor).unwrap_or_default();
        let mut column = before.width();
        let mut start = 0;
        for (offset, c) in before.char_indices() {
            if column < width {
                break;
            }
            column -= c.width().unwrap_or(0);
            start = offset + c.len_utf8();
        }
        (start, column)
    }

    /// The char the cursor sits on.
    pub fn under_cursor(&self) -> Option<char> {
        self.text.get(self.cursor..)?.chars().next()
    }

    pub fn insert_char(&mut self, c: char) -> TextChange {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        TextChange::Insert
    }

    /// Delete the char before the cursor.
    pub fn delete_back(&mut self) -> Option<TextChange> {
        let (start, _) = self.text[..self.cursor].char_indices().next_back()?;
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        Some(TextChange::Remove)
    }

    /// Delete the char under the cursor.
    pub fn delete_forward(&mut self) -> Option<TextChange> {
        let c = self.text[self.cursor..].chars().next()?;
        self.text
            .replace_range(self.cursor..self.cursor + c.len_utf8(), "");
        Some(TextChange::Remove)
    }

    /// Replace the whole text.
    pub fn replace(&mut self, text: impl Into<String>) -> Option<TextChange> {
        let text = text.into();
        if text == self.text {
            return None;
        }
        self.text = text;
        self.cursor = self.text.len();
        Some(TextChange::Replace)
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

impl QuerySource for SearchField {
    fn read_query(&self) -> Result<String, QueryReadError> {
        if self.cursor > self.text.len() {
            return Err(QueryReadError::OutOfBounds {
                offset: self.cursor,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(self.cursor) {
            return Err(QueryReadError::NotCharBoundary(self.cursor));
        }
        Ok(self.text.clone())
    }
}
