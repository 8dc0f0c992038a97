use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use super::app_state::App;
use crate::form::{SearchMode, render_form};

const HINTS: &str = "Tab next field · Enter select · Ctrl+T mode · Ctrl+D search · Esc quit";
const FLIGHT_HINTS: &str =
    "Tab next field · Enter select · Ctrl+S swap · Ctrl+T mode · Ctrl+D search · Esc quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, form_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_tabs(frame, tabs_area);
        self.render_status(frame, status_area);

        // Panels may spill over the status line, so the form goes last
        render_form(&mut self.form, frame, form_area, self.max_visible_options);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let selected = SearchMode::ALL
            .iter()
            .position(|&mode| mode == self.form.mode())
            .unwrap_or(0);

        let tabs = Tabs::new(SearchMode::ALL.iter().map(|mode| mode.title()))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )),
            None => {
                let hints = if self.form.mode() == SearchMode::Flights {
                    FLIGHT_HINTS
                } else {
                    HINTS
                };
                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
