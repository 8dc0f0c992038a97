//! Search form
//!
//! The caller side of the typeahead fields: forwards edits to the lookup
//! worker, feeds results back as options and records committed choices as
//! search parameters.

mod form_events;
mod form_render;
mod form_state;
mod search_field;

pub use form_render::render_form;
pub use form_state::{LookupSettings, SearchForm, SearchRequest};
pub use search_field::{FieldKind, SearchField, SearchMode};
