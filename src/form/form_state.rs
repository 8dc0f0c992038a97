use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::search_field::{FieldKind, SearchField, SearchMode};
use crate::config::Config;
use crate::lookup::LookupService;
use crate::typeahead::{BlurTarget, TypeaheadEvent};

/// How the form drives lookups for its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub min_query_len: usize,
    pub max_results: usize,
    pub debounce: Duration,
    pub blur_grace: Duration,
}

impl LookupSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_query_len: config.lookup.min_query_len,
            max_results: config.lookup.max_results,
            debounce: config.lookup.debounce(),
            blur_grace: config.typeahead.blur_grace(),
        }
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Parameters of a submitted search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub mode: SearchMode,
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
}

/// Search form state
#[derive(Debug)]
pub struct SearchForm {
    mode: SearchMode,
    fields: Vec<SearchField>,
    active: usize,
    settings: LookupSettings,
    lookup: LookupService,
}

impl SearchForm {
    pub fn new(mode: SearchMode, settings: LookupSettings, lookup: LookupService) -> Self {
        let mut form = Self {
            mode,
            fields: Vec::new(),
            active: 0,
            settings,
            lookup,
        };
        form.build_fields();
        form
    }

    fn build_fields(&mut self) {
        self.fields = self
            .mode
            .fields()
            .iter()
            .map(|&kind| SearchField::new(kind, self.settings.blur_grace))
            .collect();
        self.active = 0;
        if let Some(first) = self.fields.first_mut() {
            first.typeahead.focus();
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Switch to another search; fields start empty
    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.build_fields();
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&SearchField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut SearchField> {
        self.fields.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_field(&self) -> &SearchField {
        &self.fields[self.active]
    }

    pub fn active_field_mut(&mut self) -> &mut SearchField {
        &mut self.fields[self.active]
    }

    /// Move focus to field `index`, blurring the previously active one
    pub fn focus_field(&mut self, index: usize, now: Instant) {
        if index >= self.fields.len() {
            return;
        }
        if index != self.active {
            self.fields[self.active]
                .typeahead
                .blur(now, BlurTarget::Elsewhere);
            self.active = index;
        }
        let field = &mut self.fields[index];
        field.typeahead.focus();
        field.typeahead.move_cursor_to_end(&field.value);
    }

    pub fn focus_next(&mut self, now: Instant) {
        let next = (self.active + 1) % self.fields.len();
        self.focus_field(next, now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        let prev = (self.active + self.fields.len() - 1) % self.fields.len();
        self.focus_field(prev, now);
    }

    /// React to what a field's typeahead reported
    pub fn apply_event(&mut self, index: usize, event: TypeaheadEvent, now: Instant) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };

        match event {
            TypeaheadEvent::None => {}
            TypeaheadEvent::Changed(text) => {
                field.value = text;
                field.selected = None;
                self.schedule_lookup(index, now);
            }
            TypeaheadEvent::Selected(option) => {
                field.cancel_lookup();
                field.value = option.label.clone();
                field.typeahead.move_cursor_to_end(&field.value);
                log::debug!(
                    "{} set to {}",
                    field.kind().param(),
                    option.id
                );
                field.selected = Some(option);
            }
        }
    }

    /// Start (or queue) a lookup for the field's current text
    ///
    /// Text shorter than the threshold clears the options and abandons any
    /// outstanding lookup.
    fn schedule_lookup(&mut self, index: usize, now: Instant) {
        let field = &mut self.fields[index];
        let query_len = field.value.trim().chars().count();

        if query_len < self.settings.min_query_len {
            field.cancel_lookup();
            field.typeahead.clear_options();
            return;
        }

        field.typeahead.set_loading(true);
        if self.settings.debounce.is_zero() {
            self.send_lookup(index);
        } else {
            field.queued_lookup = Some(now + self.settings.debounce);
        }
    }

    fn send_lookup(&mut self, index: usize) {
        let field = &mut self.fields[index];
        field.queued_lookup = None;

        let kinds = field.kind().place_kinds();
        match self
            .lookup
            .request(index, field.value.trim(), kinds, self.settings.max_results)
        {
            Some(request_id) => field.pending_request = Some(request_id),
            None => field.cancel_lookup(),
        }
    }

    /// Apply lookup responses; only the latest request of each field counts
    pub fn poll_lookups(&mut self) {
        for response in self.lookup.poll() {
            let Some(field) = self.fields.get_mut(response.slot) else {
                continue;
            };
            if field.pending_request != Some(response.request_id) {
                log::debug!(
                    "Discarding stale lookup {} on slot {}",
                    response.request_id,
                    response.slot
                );
                continue;
            }

            field.pending_request = None;
            field.typeahead.set_loading(field.queued_lookup.is_some());

            let decoration = field.kind().decoration();
            let options = response
                .places
                .iter()
                .map(|place| place.to_option(decoration))
                .collect();
            field.typeahead.set_options(options);
        }
    }

    /// Advance timers: debounced lookups, lookup responses, blur checks
    pub fn tick(&mut self, now: Instant) {
        for index in 0..self.fields.len() {
            if self.fields[index]
                .queued_lookup
                .is_some_and(|due| now >= due)
            {
                self.send_lookup(index);
            }
        }

        self.poll_lookups();

        for field in &mut self.fields {
            field.typeahead.tick(now);
        }
    }

    /// Swap origin and destination. Only flights have both.
    pub fn swap_endpoints(&mut self) -> bool {
        if self.mode != SearchMode::Flights || self.fields.len() < 2 {
            return false;
        }

        let (left, right) = self.fields.split_at_mut(1);
        let (origin, destination) = (&mut left[0], &mut right[0]);
        std::mem::swap(&mut origin.value, &mut destination.value);
        std::mem::swap(&mut origin.selected, &mut destination.selected);

        for field in [origin, destination] {
            field.cancel_lookup();
            field.typeahead.clear_options();
            field.typeahead.move_cursor_to_end(&field.value);
        }
        true
    }

    /// Collect the committed ids, or explain what is missing
    pub fn submit(&self) -> Result<SearchRequest, String> {
        let mut params = BTreeMap::new();
        for field in &self.fields {
            let Some(id) = field.selected_id() else {
                return Err(format!("Select a value for {}", field.kind().title()));
            };
            params.insert(field.kind().param().to_string(), id.to_string());
        }

        if self.mode == SearchMode::Flights {
            let origin = params.get(FieldKind::Origin.param());
            let destination = params.get(FieldKind::Destination.param());
            if origin.is_some() && origin == destination {
                return Err("From and To must be different airports".to_string());
            }
        }

        Ok(SearchRequest {
            mode: self.mode,
            params,
        })
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
