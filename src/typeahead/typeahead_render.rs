//! Typeahead rendering
//!
//! The input field and the option panel are drawn separately so the caller
//! can draw every field first and the active panel last, on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::typeahead_option::{Decoration, TypeaheadOption};
use super::typeahead_state::{PanelLayout, TypeaheadState};
use crate::widgets::popup;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const LOADING_TEXT: &str = "Searching...";
const PANEL_BORDER_HEIGHT: u16 = 2;
const HIGHLIGHT_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";

/// Caller-supplied presentation of one field
#[derive(Debug, Clone, Copy)]
pub struct TypeaheadView<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub decoration: Option<Decoration>,
}

fn spinner(state: &TypeaheadState) -> &'static str {
    SPINNER_FRAMES[state.spinner_frame() % SPINNER_FRAMES.len()]
}

/// Render the input field and remember its area for pointer hit-testing
pub fn render_field(state: &mut TypeaheadState, view: &TypeaheadView, frame: &mut Frame, area: Rect) {
    state.set_input_area(area);

    let border_color = if state.is_focused() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.title))
        .border_style(Style::default().fg(border_color));

    if state.is_loading() {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {} ", spinner(state)),
                Style::default().fg(Color::Yellow),
            ))
            .right_aligned(),
        );
    }

    let prefix = view
        .decoration
        .map(|d| format!("{} ", d.glyph()))
        .unwrap_or_default();

    let mut spans = vec![Span::styled(
        prefix.clone(),
        Style::default().fg(Color::Gray),
    )];
    if view.value.is_empty() {
        spans.push(Span::styled(
            view.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            view.value.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if state.is_focused() {
        let before_cursor: String = view.value.chars().take(state.cursor(view.value)).collect();
        let offset = (prefix.width() + before_cursor.width()) as u16;
        let max_x = area.right().saturating_sub(2);
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

/// First option index shown so the highlighted row stays in view
pub fn visible_window_start(highlight: Option<usize>, max_visible: usize) -> usize {
    match highlight {
        Some(h) if max_visible > 0 && h >= max_visible => h + 1 - max_visible,
        _ => 0,
    }
}

/// Render the option panel under (or over) `input_area`, clipped to `bounds`
pub fn render_panel(
    state: &mut TypeaheadState,
    max_visible: usize,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) {
    if !state.is_panel_visible() {
        state.set_panel_layout(None);
        return;
    }

    let loading_only = state.options().is_empty();
    let wanted_rows = if loading_only {
        0
    } else {
        state.options().len().min(max_visible)
    };
    let panel_height = (wanted_rows.max(1) as u16) + PANEL_BORDER_HEIGHT;

    let panel_area = popup::popup_near_anchor(input_area, input_area.width, panel_height, bounds);

    // Scroll within the rows that survive clipping, not the requested ones
    let drawn_rows = wanted_rows.min(panel_area.height.saturating_sub(PANEL_BORDER_HEIGHT) as usize);
    let first_index = if loading_only {
        0
    } else {
        visible_window_start(state.highlight_index(), drawn_rows)
    };

    let items: Vec<ListItem> = if loading_only {
        vec![ListItem::new(Line::from(Span::styled(
            format!("{}{} {}", PLAIN_MARKER, spinner(state), LOADING_TEXT),
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        let highlight = state.highlight_index();
        state
            .options()
            .iter()
            .enumerate()
            .skip(first_index)
            .take(drawn_rows)
            .map(|(i, option)| ListItem::new(option_line(option, highlight == Some(i))))
            .collect()
    };

    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, panel_area);

    state.set_panel_layout(Some(PanelLayout {
        area: panel_area,
        first_index,
        rows: drawn_rows,
    }));
}

fn option_line(option: &TypeaheadOption, highlighted: bool) -> Line<'static> {
    let (marker, label_style, secondary_style) = if highlighted {
        (
            HIGHLIGHT_MARKER,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (
            PLAIN_MARKER,
            Style::default().fg(Color::White).bg(Color::Black),
            Style::default().fg(Color::DarkGray).bg(Color::Black),
        )
    };

    let mut text = String::from(marker);
    if let Some(decoration) = option.decoration {
        text.push_str(decoration.glyph());
        text.push(' ');
    }
    text.push_str(&option.label);

    let mut spans = vec![Span::styled(text, label_style)];
    if let Some(secondary) = &option.secondary_label {
        spans.push(Span::styled(format!("  {}", secondary), secondary_style));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "typeahead_render_tests.rs"]
mod typeahead_render_tests;
