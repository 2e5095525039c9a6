//! Home screen implementation
//!
//! Shows the restaurant header, item count, per-course average prices and
//! the full menu. Items can be removed from here.

use super::{menu_card, ACCENT};
use crate::{
    app::state::{NavigationAction, StateManager},
    config::AppConfig,
    models::Course,
    store::MenuStore,
    util::format_rounded_price,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Requests the home screen hands back to the app controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCommand {
    OpenAdd,
    OpenFilter,
    RemoveSelected,
    Quit,
}

/// Home screen component with item selection
#[derive(Debug)]
pub struct HomeScreen {
    selected_index: usize,
    list_state: ListState,
    show_details: bool,
}

impl HomeScreen {
    /// Create a new home screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected_index: 0,
            list_state,
            show_details: false,
        }
    }

    /// Index of the highlighted item
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Whether the details popup is open
    pub fn is_showing_details(&self) -> bool {
        self.show_details
    }

    /// Move selection up, wrapping to the last item
    pub fn select_previous(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = item_count - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down, wrapping to the first item
    pub fn select_next(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        if self.selected_index < item_count - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Keep the selection inside the menu after it shrinks
    pub fn clamp_selection(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
            self.show_details = false;
        } else {
            self.selected_index = self.selected_index.min(item_count - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Handle key events for the home screen
    pub fn handle_key_event(&mut self, key: KeyEvent, item_count: usize) -> Option<HomeCommand> {
        if self.show_details {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                self.show_details = false;
            }
            return None;
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => return Some(HomeCommand::OpenAdd),
            KeyCode::Char('f') | KeyCode::Char('F') => return Some(HomeCommand::OpenFilter),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                return (item_count > 0).then_some(HomeCommand::RemoveSelected);
            }
            _ => {}
        }

        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.select_previous(item_count),
            NavigationAction::Down => self.select_next(item_count),
            NavigationAction::Select if item_count > 0 => self.show_details = true,
            NavigationAction::Quit => return Some(HomeCommand::Quit),
            _ => {}
        }
        None
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame, store: &MenuStore, config: &AppConfig) {
        let size = f.size();
        self.clamp_selection(store.len());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Restaurant name
                Constraint::Length(1), // Item count
                Constraint::Length(4), // Average prices
                Constraint::Min(4),    // Menu list
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0], &config.restaurant_name);

        let count = Paragraph::new(format!("Total Items: {}", store.len()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(count, chunks[1]);

        self.render_averages(f, chunks[2], store, &config.currency_symbol);
        self.render_menu(f, chunks[3], store, &config.currency_symbol);
        self.render_help(f, chunks[4]);

        if self.show_details {
            if let Some(item) = store.items().get(self.selected_index) {
                let area = popup_rect(60, 9, size);
                let details = Paragraph::new(item.details())
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Item Details")
                            .border_style(Style::default().fg(ACCENT)),
                    );
                f.render_widget(Clear, area);
                f.render_widget(details, area);
            }
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect, restaurant_name: &str) {
        let title = Paragraph::new(restaurant_name.to_string())
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(title, area);
    }

    fn render_averages(&self, f: &mut Frame, area: Rect, store: &MenuStore, symbol: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Average Prices")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let averages = store.averages_by_course();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(inner);

        for (course, column) in Course::all().into_iter().zip(columns.iter()) {
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(
                    course.plural_label(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format_rounded_price(symbol, averages.get(course)),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(cell, *column);
        }
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect, store: &MenuStore, symbol: &str) {
        let items: Vec<ListItem> = store
            .items()
            .iter()
            .map(|item| menu_card(item, symbol))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(ACCENT).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Details  "),
            Span::styled("A", key),
            Span::raw(" Add  "),
            Span::styled("F", key),
            Span::raw(" Filter  "),
            Span::styled("D", key),
            Span::raw(" Remove  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn popup_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = HomeScreen::new();
        screen.select_previous(3);
        assert_eq!(screen.selected_index(), 2);
        screen.select_next(3);
        assert_eq!(screen.selected_index(), 0);
        screen.select_next(3);
        assert_eq!(screen.selected_index(), 1);
    }

    #[test]
    fn test_navigation_on_empty_menu() {
        let mut screen = HomeScreen::new();
        screen.select_next(0);
        screen.select_previous(0);
        assert_eq!(screen.selected_index(), 0);
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('d')), 0), None);
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut screen = HomeScreen::new();
        screen.select_previous(6);
        assert_eq!(screen.selected_index(), 5);
        screen.clamp_selection(5);
        assert_eq!(screen.selected_index(), 4);
        screen.clamp_selection(0);
        assert_eq!(screen.selected_index(), 0);
    }

    #[test]
    fn test_commands() {
        let mut screen = HomeScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('a')), 6),
            Some(HomeCommand::OpenAdd)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('f')), 6),
            Some(HomeCommand::OpenFilter)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Delete), 6),
            Some(HomeCommand::RemoveSelected)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('q')), 6),
            Some(HomeCommand::Quit)
        );
        assert_eq!(screen.handle_key_event(key(KeyCode::Down), 6), None);
        assert_eq!(screen.selected_index(), 1);
    }

    #[test]
    fn test_details_popup_swallows_keys() {
        let mut screen = HomeScreen::new();
        screen.handle_key_event(key(KeyCode::Enter), 6);
        assert!(screen.is_showing_details());

        assert_eq!(screen.handle_key_event(key(KeyCode::Char('d')), 6), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('q')), 6), None);

        screen.handle_key_event(key(KeyCode::Esc), 6);
        assert!(!screen.is_showing_details());
    }
}
