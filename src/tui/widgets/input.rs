//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::{field_label, CURSOR_STYLE};

/// A simple text input field
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: String::new(),
            label: String::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as a single line, drawing the cursor when focused
    pub fn line(&self, focused: bool) -> Line<'static> {
        let mut spans = vec![field_label(&self.label, focused)];
        let value_style = Style::default().fg(Color::White);

        if !focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(self.content.clone(), value_style));
            }
            return Line::from(spans);
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(cursor_char.to_string(), CURSOR_STYLE));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
        Line::from(spans)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut input = TextInput::new();
        for c in "Cofee".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new();
        input.set_content("Bread");
        input.backspace();
        assert_eq!(input.value(), "Brea");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "rea");

        input.move_start();
        input.backspace();
        assert_eq!(input.value(), "rea");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.set_content("Café");
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.insert('é');
        input.insert('s');
        assert_eq!(input.value(), "Cafés");
        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "Cafs");
    }

    #[test]
    fn test_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new()
            .label("Description")
            .placeholder("Expense Description");
        assert_eq!(line_text(&input.line(false)), "Description: Expense Description");
        assert_eq!(line_text(&input.line(true)), "Description:  ");
    }
}
