//! Keyboard handling for the typeahead field
//!
//! Navigation keys act only while the panel is open. Text edits always
//! open the panel and are reported as `Changed` with the full new value;
//! the caller decides what to do with it.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::typeahead_state::{TypeaheadEvent, TypeaheadState};

impl TypeaheadState {
    /// Handle a key press against the caller's current `value`
    pub fn handle_key(&mut self, key: KeyEvent, value: &str) -> TypeaheadEvent {
        match key.code {
            KeyCode::Down => {
                self.move_highlight_down();
                TypeaheadEvent::None
            }
            KeyCode::Up => {
                self.move_highlight_up();
                TypeaheadEvent::None
            }
            KeyCode::Enter => {
                if !self.is_open() {
                    return TypeaheadEvent::None;
                }
                match self.highlight_index() {
                    Some(index) => self.commit(index),
                    None => TypeaheadEvent::None,
                }
            }
            KeyCode::Esc => {
                if self.is_open() {
                    self.dismiss();
                }
                TypeaheadEvent::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(value, ch)
            }
            KeyCode::Backspace => self.delete_before_cursor(value),
            KeyCode::Delete => self.delete_at_cursor(value),
            KeyCode::Left => {
                let cursor = self.cursor(value);
                self.set_cursor(cursor.saturating_sub(1));
                TypeaheadEvent::None
            }
            KeyCode::Right => {
                let cursor = self.cursor(value);
                self.set_cursor((cursor + 1).min(value.chars().count()));
                TypeaheadEvent::None
            }
            KeyCode::Home => {
                self.set_cursor(0);
                TypeaheadEvent::None
            }
            KeyCode::End => {
                self.move_cursor_to_end(value);
                TypeaheadEvent::None
            }
            _ => TypeaheadEvent::None,
        }
    }

    fn insert_char(&mut self, value: &str, ch: char) -> TypeaheadEvent {
        let cursor = self.cursor(value);
        let byte_pos = byte_offset(value, cursor);

        let mut new_value = String::with_capacity(value.len() + ch.len_utf8());
        new_value.push_str(&value[..byte_pos]);
        new_value.push(ch);
        new_value.push_str(&value[byte_pos..]);

        self.edited(new_value, cursor + 1)
    }

    fn delete_before_cursor(&mut self, value: &str) -> TypeaheadEvent {
        let cursor = self.cursor(value);
        if cursor == 0 {
            return TypeaheadEvent::None;
        }
        let start = byte_offset(value, cursor - 1);
        let end = byte_offset(value, cursor);
        let new_value = format!("{}{}", &value[..start], &value[end..]);

        self.edited(new_value, cursor - 1)
    }

    fn delete_at_cursor(&mut self, value: &str) -> TypeaheadEvent {
        let cursor = self.cursor(value);
        if cursor >= value.chars().count() {
            return TypeaheadEvent::None;
        }
        let start = byte_offset(value, cursor);
        let end = byte_offset(value, cursor + 1);
        let new_value = format!("{}{}", &value[..start], &value[end..]);

        self.edited(new_value, cursor)
    }

    fn edited(&mut self, new_value: String, cursor: usize) -> TypeaheadEvent {
        self.set_cursor(cursor);
        self.open_for_edit();
        TypeaheadEvent::Changed(new_value)
    }
}

/// Byte offset of the `char_index`-th char, or the end of the string
fn byte_offset(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

#[cfg(test)]
#[path = "typeahead_events_tests.rs"]
mod typeahead_events_tests;
