//! Text input handling for form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const MASK_CHAR: char = '•';
const CURSOR_CHAR: char = '▏';

/// A single-line text field with cursor support.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Current input value.
    value: String,
    /// Cursor position (byte index).
    cursor: usize,
    pub label: String,
    /// Render as bullets unless revealed (passwords).
    pub masked: bool,
}

impl InputField {
    pub fn new(label: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            label: label.to_string(),
            masked: false,
        }
    }

    pub fn masked(label: &str) -> Self {
        let mut field = Self::new(label);
        field.masked = true;
        field
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value.to_string());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: String) {
        self.cursor = value.len();
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle a key event, returns true if the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.len();
                true
            }
            KeyCode::Char('u') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char('w') if ctrl => {
                self.delete_word_backward();
                true
            }
            // Other control chords belong to the app.
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char_backward();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.move_cursor_left();
                true
            }
            KeyCode::Right => {
                self.move_cursor_right();
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }

    /// Text to show for this field. Masked fields show one bullet per
    /// character unless `reveal` is set; `focused` draws the cursor.
    pub fn display(&self, reveal: bool, focused: bool) -> String {
        let (before, after) = self.value.split_at(self.cursor);
        let hide = self.masked && !reveal;
        let render = |s: &str| {
            if hide {
                MASK_CHAR.to_string().repeat(s.chars().count())
            } else {
                s.to_string()
            }
        };
        if focused {
            format!("{}{}{}", render(before), CURSOR_CHAR, render(after))
        } else {
            render(&self.value)
        }
    }

    fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char_backward(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    fn delete_word_backward(&mut self) {
        let end = self.cursor;
        let chars: Vec<_> = self.value[..end].char_indices().collect();
        let mut i = chars.len();
        while i > 0 && chars[i - 1].1.is_whitespace() {
            i -= 1;
        }
        while i > 0 && !chars[i - 1].1.is_whitespace() {
            i -= 1;
        }
        let start = if i == 0 { 0 } else { chars[i].0 };
        self.value.drain(start..end);
        self.cursor = start;
    }
}
