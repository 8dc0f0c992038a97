#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::form::{LookupSettings, SearchForm, SearchMode};
    use crate::lookup::{Catalog, LookupService};
    use crate::typeahead::TypeaheadOption;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn fruit_options() -> Vec<TypeaheadOption> {
        vec![
            TypeaheadOption::new("A", "Apple"),
            TypeaheadOption::new("B", "Banana"),
        ]
    }

    pub fn numbered_options(count: usize) -> Vec<TypeaheadOption> {
        (0..count)
            .map(|i| TypeaheadOption::new(format!("opt-{}", i), format!("Option {}", i)))
            .collect()
    }

    pub fn test_form(mode: SearchMode) -> SearchForm {
        test_form_with(mode, LookupSettings::default())
    }

    pub fn test_form_with(mode: SearchMode, settings: LookupSettings) -> SearchForm {
        let catalog = Catalog::builtin().expect("built-in catalog");
        SearchForm::new(mode, settings, LookupService::spawn(catalog))
    }

    pub fn test_app(mode: SearchMode) -> App {
        let catalog = Catalog::builtin().expect("built-in catalog");
        App::new(mode, &Config::default(), catalog)
    }

    /// Type `text` into the active field one key at a time
    pub fn type_text(form: &mut SearchForm, text: &str) {
        for ch in text.chars() {
            form.handle_key(key(KeyCode::Char(ch)), Instant::now());
        }
    }

    /// Wait for outstanding lookups by polling
    ///
    /// Ticks the form until no field has a pending or queued lookup.
    /// Returns true if lookups settled, false on timeout.
    pub fn wait_for_lookups(form: &mut SearchForm, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            form.tick(Instant::now());
            let settled = form
                .fields()
                .iter()
                .all(|field| field.pending_request().is_none() && !field.has_queued_lookup());
            if settled {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
