use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        // Esc closes an open panel first; with nothing open it leaves
        if key.code == KeyCode::Esc && !self.form.active_field().typeahead.is_panel_visible() {
            self.should_quit = true;
            return;
        }

        self.form.handle_key(key, now);
    }

    /// Keys that work regardless of which field is focused
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('d') if ctrl => self.submit(),
            KeyCode::Enter if ctrl => self.submit(),
            KeyCode::Char('t') if ctrl => self.cycle_mode(),
            KeyCode::Char('s') if ctrl => self.swap_endpoints(),
            KeyCode::Tab => self.form.focus_next(now),
            KeyCode::BackTab => self.form.focus_prev(now),
            _ => return false,
        }
        true
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.form.handle_click(mouse.column, mouse.row, now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
