use std::time::Instant;

use crate::config::Config;
use crate::form::{LookupSettings, SearchForm, SearchMode, SearchRequest};
use crate::lookup::{Catalog, LookupService};

/// Application state
pub struct App {
    pub form: SearchForm,
    pub max_visible_options: usize,
    /// Validation message shown in place of the key hints
    pub status: Option<String>,
    output: Option<SearchRequest>,
    pub(super) should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(mode: SearchMode, config: &Config, catalog: Catalog) -> Self {
        let settings = LookupSettings::from_config(config);
        let lookup = LookupService::spawn(catalog);

        Self {
            form: SearchForm::new(mode, settings, lookup),
            // At least one option row
            max_visible_options: config.typeahead.max_visible_options.max(1),
            status: None,
            output: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The submitted search, if the user completed the form
    pub fn output(&self) -> Option<&SearchRequest> {
        self.output.as_ref()
    }

    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }

    /// Submit the form; quits on success, shows the problem otherwise
    pub fn submit(&mut self) {
        match self.form.submit() {
            Ok(request) => {
                log::info!("Submitting {} search {:?}", request.mode, request.params);
                self.output = Some(request);
                self.status = None;
                self.should_quit = true;
            }
            Err(message) => {
                log::debug!("Submit rejected: {}", message);
                self.status = Some(message);
            }
        }
    }

    pub fn cycle_mode(&mut self) {
        let next = self.form.mode().next();
        self.form.set_mode(next);
        self.status = None;
    }

    pub fn swap_endpoints(&mut self) {
        if self.form.swap_endpoints() {
            self.status = None;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
