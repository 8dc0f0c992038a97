//! Typeahead selector
//!
//! A text field paired with a caller-supplied list of options. The field
//! forwards every edit to its caller, shows whatever options the caller
//! currently provides, and reports a committed choice back. It never
//! performs lookups itself and never stores the text it displays.

mod blur;
mod typeahead_events;
mod typeahead_option;
mod typeahead_render;
mod typeahead_state;

pub use blur::{BlurTarget, PendingBlur};
pub use typeahead_option::{Decoration, TypeaheadOption};
pub use typeahead_render::{TypeaheadView, render_field, render_panel};
pub use typeahead_state::{DEFAULT_BLUR_GRACE, PanelLayout, TypeaheadEvent, TypeaheadState};
