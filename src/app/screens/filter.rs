//! Filter screen implementation
//!
//! Lets guests narrow the menu to a single course.

use super::{menu_card, ACCENT};
use crate::{
    app::state::{NavigationAction, StateManager},
    config::AppConfig,
    models::CourseFilter,
    store::MenuStore,
    util::format_count_heading,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Requests the filter screen hands back to the app controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCommand {
    Back,
    Quit,
}

/// Course filter component with a scrollable result list
#[derive(Debug, Default)]
pub struct FilterScreen {
    selected_index: usize,
    result_index: usize,
    result_state: ListState,
}

impl FilterScreen {
    /// Create a filter screen showing all items
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active filter
    pub fn active_filter(&self) -> CourseFilter {
        CourseFilter::all()[self.selected_index]
    }

    /// Index of the highlighted result
    pub fn result_index(&self) -> usize {
        self.result_index
    }

    /// Move to the previous filter option, wrapping
    pub fn select_previous(&mut self) {
        let count = CourseFilter::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
        self.reset_results();
    }

    /// Move to the next filter option, wrapping
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % CourseFilter::all().len();
        self.reset_results();
    }

    /// Move the result highlight up, wrapping to the last result
    pub fn select_previous_result(&mut self, result_count: usize) {
        if result_count == 0 {
            return;
        }
        if self.result_index > 0 {
            self.result_index -= 1;
        } else {
            self.result_index = result_count - 1;
        }
        self.result_state.select(Some(self.result_index));
    }

    /// Move the result highlight down, wrapping to the first result
    pub fn select_next_result(&mut self, result_count: usize) {
        if result_count == 0 {
            return;
        }
        if self.result_index < result_count - 1 {
            self.result_index += 1;
        } else {
            self.result_index = 0;
        }
        self.result_state.select(Some(self.result_index));
    }

    fn reset_results(&mut self) {
        self.result_index = 0;
        self.result_state.select(None);
    }

    fn clamp_results(&mut self, result_count: usize) {
        if result_count == 0 {
            self.reset_results();
        } else {
            self.result_index = self.result_index.min(result_count - 1);
            self.result_state.select(Some(self.result_index));
        }
    }

    /// Handle key events for the filter screen
    ///
    /// Left/Right and Tab change the course, Up/Down scroll the results.
    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        result_count: usize,
    ) -> Option<FilterCommand> {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Left | NavigationAction::Previous => self.select_previous(),
            NavigationAction::Right | NavigationAction::Next => self.select_next(),
            NavigationAction::Up => self.select_previous_result(result_count),
            NavigationAction::Down => self.select_next_result(result_count),
            NavigationAction::Back => return Some(FilterCommand::Back),
            NavigationAction::Quit => return Some(FilterCommand::Quit),
            _ => {}
        }
        None
    }

    /// Render the filter screen
    pub fn render(&mut self, f: &mut Frame, store: &MenuStore, config: &AppConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Length(3), // Filter buttons
                Constraint::Length(1), // Results heading
                Constraint::Min(3),    // Results
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Filter Menu")
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let subtitle = Paragraph::new("Choose a course to filter")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, chunks[1]);

        self.render_buttons(f, chunks[2]);

        let filter = self.active_filter();
        let results = store.filter(filter);
        self.clamp_results(results.len());

        let heading = Paragraph::new(format_count_heading(&filter.heading(), results.len()))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(heading, chunks[3]);

        if results.is_empty() {
            let empty = Paragraph::new("No items found")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, chunks[4]);
        } else {
            let items: Vec<ListItem> = results
                .iter()
                .map(|item| menu_card(item, &config.currency_symbol))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(Style::default().bg(ACCENT).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, chunks[4], &mut self.result_state);
        }

        let help = Paragraph::new("←→: Change course | ↑↓: Scroll | Esc: Back to Home | Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[5]);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect) {
        let options = CourseFilter::all();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 5); 5])
            .split(area);

        for (i, (option, column)) in options.iter().zip(columns.iter()).enumerate() {
            let (text_style, border_style) = if i == self.selected_index {
                (
                    Style::default()
                        .bg(ACCENT)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(ACCENT),
                )
            } else {
                (Style::default(), Style::default())
            };
            let button = Paragraph::new(option.label())
                .style(text_style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            f.render_widget(button, *column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_filter_cycling() {
        let mut screen = FilterScreen::new();
        assert_eq!(screen.active_filter(), CourseFilter::All);

        screen.handle_key_event(key(KeyCode::Right), 6);
        assert_eq!(screen.active_filter(), CourseFilter::Only(Course::Starter));

        screen.handle_key_event(key(KeyCode::Tab), 1);
        assert_eq!(screen.active_filter(), CourseFilter::Only(Course::Main));

        screen.handle_key_event(key(KeyCode::Left), 3);
        screen.handle_key_event(key(KeyCode::Left), 1);
        screen.handle_key_event(key(KeyCode::Left), 6);
        assert_eq!(screen.active_filter(), CourseFilter::Only(Course::Beverage));
    }

    #[test]
    fn test_result_scrolling_wraps() {
        let mut screen = FilterScreen::new();
        screen.handle_key_event(key(KeyCode::Down), 3);
        screen.handle_key_event(key(KeyCode::Down), 3);
        assert_eq!(screen.result_index(), 2);
        screen.handle_key_event(key(KeyCode::Down), 3);
        assert_eq!(screen.result_index(), 0);
        screen.handle_key_event(key(KeyCode::Up), 3);
        assert_eq!(screen.result_index(), 2);
        // Scrolling never changes the course
        assert_eq!(screen.active_filter(), CourseFilter::All);
    }

    #[test]
    fn test_changing_course_resets_scroll() {
        let mut screen = FilterScreen::new();
        screen.handle_key_event(key(KeyCode::Down), 6);
        screen.handle_key_event(key(KeyCode::Down), 6);
        screen.handle_key_event(key(KeyCode::Right), 6);
        assert_eq!(screen.result_index(), 0);
        screen.handle_key_event(key(KeyCode::Up), 0);
        assert_eq!(screen.result_index(), 0);
    }

    #[test]
    fn test_commands() {
        let mut screen = FilterScreen::new();
        assert_eq!(screen.handle_key_event(key(KeyCode::Esc), 6), Some(FilterCommand::Back));
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Backspace), 6),
            Some(FilterCommand::Back)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('q')), 6),
            Some(FilterCommand::Quit)
        );
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter), 6), None);
    }
}
