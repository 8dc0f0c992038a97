//! Search form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::form_state::SearchForm;
use crate::typeahead::{TypeaheadView, render_field, render_panel};

const FIELD_HEIGHT: u16 = 3;

/// Render every field, then the open panels on top (active field last)
pub fn render_form(form: &mut SearchForm, frame: &mut Frame, area: Rect, max_visible: usize) {
    let count = form.fields().len();
    let mut constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    for index in 0..count {
        let Some(field) = form.field_mut(index) else {
            continue;
        };
        let kind = field.kind();
        let title = match &field.selected {
            Some(option) => format!("{} [{}]", kind.title(), option.id),
            None => kind.title().to_string(),
        };
        let view = TypeaheadView {
            title: &title,
            placeholder: kind.placeholder(),
            value: &field.value,
            decoration: Some(kind.decoration()),
        };
        render_field(&mut field.typeahead, &view, frame, rows[index]);
    }

    let bounds = frame.area();
    let active = form.active_index();
    let order = (0..count).filter(|&i| i != active).chain(std::iter::once(active));
    for index in order {
        let Some(field) = form.field_mut(index) else {
            continue;
        };
        let Some(input_area) = field.typeahead.input_area() else {
            continue;
        };
        render_panel(&mut field.typeahead, max_visible, frame, input_area, bounds);
    }
}
