use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::blur::{BlurTarget, PendingBlur};
use super::typeahead_option::TypeaheadOption;

pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(100);

/// Outcome of an interaction, reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadEvent {
    None,
    /// The text was edited; carries the full new value
    Changed(String),
    /// An option was committed
    Selected(TypeaheadOption),
}

/// Where the option rows were drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Panel rectangle including its border
    pub area: Rect,
    /// Index of the option shown in the first row
    pub first_index: usize,
    /// Number of option rows drawn (0 for the loading row)
    pub rows: usize,
}

impl PanelLayout {
    /// Option index under a screen position, if any
    pub fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner_x = self.area.x.saturating_add(1);
        let inner_y = self.area.y.saturating_add(1);
        let inner_width = self.area.width.saturating_sub(2);

        if column < inner_x || column >= inner_x.saturating_add(inner_width) || row < inner_y {
            return None;
        }

        let offset = (row - inner_y) as usize;
        if offset < self.rows {
            Some(self.first_index + offset)
        } else {
            None
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

/// Interaction state of one typeahead field
///
/// Owned by a single field for as long as it is mounted. Dropping it drops
/// any pending blur check along with it.
#[derive(Debug, Clone)]
pub struct TypeaheadState {
    open: bool,
    focused: bool,
    highlight: Option<usize>,
    options: Vec<TypeaheadOption>,
    loading: bool,
    cursor: usize,
    pending_blur: Option<PendingBlur>,
    blur_grace: Duration,
    spinner_frame: usize,
    input_area: Option<Rect>,
    panel: Option<PanelLayout>,
}

impl Default for TypeaheadState {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeaheadState {
    pub fn new() -> Self {
        Self::with_blur_grace(DEFAULT_BLUR_GRACE)
    }

    pub fn with_blur_grace(blur_grace: Duration) -> Self {
        Self {
            open: false,
            focused: false,
            highlight: None,
            options: Vec::new(),
            loading: false,
            cursor: 0,
            pending_blur: None,
            blur_grace,
            spinner_frame: 0,
            input_area: None,
            panel: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Highlighted row, `None` when nothing is highlighted
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    pub fn options(&self) -> &[TypeaheadOption] {
        &self.options
    }

    pub fn highlighted_option(&self) -> Option<&TypeaheadOption> {
        self.highlight.and_then(|i| self.options.get(i))
    }

    /// The panel shows while open and there is something to show
    pub fn is_panel_visible(&self) -> bool {
        self.open && (!self.options.is_empty() || self.loading)
    }

    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    pub fn pending_blur(&self) -> Option<PendingBlur> {
        self.pending_blur
    }

    pub fn blur_grace(&self) -> Duration {
        self.blur_grace
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Edit cursor as a char index, clamped to `value`
    pub fn cursor(&self, value: &str) -> usize {
        self.cursor.min(value.chars().count())
    }

    pub(super) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Move the edit cursor to the end of `value`
    pub fn move_cursor_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Replace the options with a freshly supplied list
    pub fn set_options(&mut self, options: Vec<TypeaheadOption>) {
        self.options = options;
        self.reset_highlight();
    }

    pub fn clear_options(&mut self) {
        self.set_options(Vec::new());
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.reset_highlight();
        }
    }

    fn reset_highlight(&mut self) {
        self.highlight = if self.open && !self.options.is_empty() {
            Some(0)
        } else {
            None
        };
    }

    /// Field received focus
    pub fn focus(&mut self) {
        self.focused = true;
        self.pending_blur = None;
        self.set_open(true);
    }

    /// Field lost focus; the close is deferred until `tick` sees the deadline
    pub fn blur(&mut self, now: Instant, target: BlurTarget) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.pending_blur = Some(PendingBlur::new(now, self.blur_grace, target));
    }

    /// Pointer pressed on the panel. Returns whether it landed on an option row.
    ///
    /// A press on a row moves focus into the panel, so a pending blur check
    /// no longer closes it. Presses on the border or the loading row leave
    /// the check alone.
    pub fn pointer_down_on_panel(&mut self, column: u16, row: u16) -> bool {
        let on_row = self.is_panel_visible()
            && self
                .panel
                .is_some_and(|panel| panel.option_at(column, row).is_some());
        if on_row {
            if let Some(pending) = self.pending_blur.as_mut() {
                pending.retarget(BlurTarget::Panel);
            }
        }
        on_row
    }

    /// Advance timers. Returns true when the panel closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }

        let Some(pending) = self.pending_blur else {
            return false;
        };
        if !pending.is_due(now) {
            return false;
        }

        self.pending_blur = None;
        if self.focused {
            return false;
        }
        if !pending.closes_panel() {
            // Focus went to our own panel, which counts as still focused
            self.focused = true;
            return false;
        }
        if self.open {
            self.set_open(false);
            return true;
        }
        false
    }

    /// Open the panel in response to an edit
    pub(super) fn open_for_edit(&mut self) {
        if !self.focused {
            self.focus();
        }
        self.set_open(true);
    }

    pub fn move_highlight_down(&mut self) {
        if !self.open {
            return;
        }
        let last = self.options.len().checked_sub(1);
        self.highlight = match (self.highlight, last) {
            (_, None) => None,
            (None, Some(_)) => Some(0),
            (Some(i), Some(last)) => Some((i + 1).min(last)),
        };
    }

    pub fn move_highlight_up(&mut self) {
        if !self.open {
            return;
        }
        self.highlight = self.highlight.map(|i| i.saturating_sub(1));
    }

    /// Commit the option at `index`, closing the panel and dropping focus
    pub fn commit(&mut self, index: usize) -> TypeaheadEvent {
        let Some(option) = self.options.get(index).cloned() else {
            return TypeaheadEvent::None;
        };
        log::debug!("Committed option {} ({})", option.id, option.label);
        self.dismiss();
        TypeaheadEvent::Selected(option)
    }

    /// Close the panel and drop focus without selecting
    pub fn dismiss(&mut self) {
        self.pending_blur = None;
        self.focused = false;
        self.set_open(false);
    }

    pub fn input_area(&self) -> Option<Rect> {
        self.input_area
    }

    pub fn set_input_area(&mut self, area: Rect) {
        self.input_area = Some(area);
    }

    pub fn panel_layout(&self) -> Option<PanelLayout> {
        self.panel
    }

    pub fn set_panel_layout(&mut self, panel: Option<PanelLayout>) {
        self.panel = panel;
    }

    pub fn input_contains(&self, column: u16, row: u16) -> bool {
        self.input_area.is_some_and(|area| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        })
    }

    /// Whether a screen position lies on the currently shown panel
    pub fn panel_contains(&self, column: u16, row: u16) -> bool {
        self.is_panel_visible() && self.panel.is_some_and(|panel| panel.contains(column, row))
    }

    /// Pointer click; commits the option row under the pointer, if any
    ///
    /// Rows stay clickable while a blur check is pending, so a click that
    /// blurred the field first still lands.
    pub fn click_at(&mut self, column: u16, row: u16) -> TypeaheadEvent {
        if !self.is_panel_visible() {
            return TypeaheadEvent::None;
        }
        let Some(index) = self.panel.and_then(|panel| panel.option_at(column, row)) else {
            return TypeaheadEvent::None;
        };
        self.commit(index)
    }
}

#[cfg(test)]
#[path = "typeahead_state_tests.rs"]
mod typeahead_state_tests;
