//! Keyboard and pointer routing for the search form

use std::time::Instant;

use ratatui::crossterm::event::KeyEvent;

use super::form_state::SearchForm;
use crate::typeahead::BlurTarget;

impl SearchForm {
    /// Route a key press to the active field
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let index = self.active_index();
        let field = self.active_field_mut();
        let event = field.typeahead.handle_key(key, &field.value);
        self.apply_event(index, event, now);
    }

    /// Route a left click
    ///
    /// Open panels are checked first since they are drawn over the fields.
    /// A panel stays clickable during its blur grace period even when it
    /// belongs to a field that just lost focus.
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(index) = self.panel_at(column, row) {
            let Some(field) = self.field_mut(index) else {
                return;
            };
            // Border and loading-row presses select nothing; any pending
            // blur check still runs
            if field.typeahead.pointer_down_on_panel(column, row) {
                let event = field.typeahead.click_at(column, row);
                self.apply_event(index, event, now);
            }
            return;
        }

        if let Some(index) = self
            .fields()
            .iter()
            .position(|field| field.typeahead.input_contains(column, row))
        {
            self.focus_field(index, now);
            return;
        }

        self.active_field_mut()
            .typeahead
            .blur(now, BlurTarget::Elsewhere);
    }

    fn panel_at(&self, column: u16, row: u16) -> Option<usize> {
        let active = self.active_index();
        let fields = self.fields();

        if fields[active].typeahead.panel_contains(column, row) {
            return Some(active);
        }
        fields
            .iter()
            .position(|field| field.typeahead.panel_contains(column, row))
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
