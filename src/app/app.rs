//! Main application controller
//!
//! Owns the menu store and all UI state, turns key events into store
//! operations and screen transitions, and renders the current screen.

use crate::{
    app::{
        screens::{AddCommand, AddScreen, FilterCommand, FilterScreen, HomeCommand, HomeScreen},
        state::{AppState, StateManager},
    },
    config::AppConfig,
    store::MenuStore,
};
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// TUI application controller
pub struct App {
    /// User preferences
    config: AppConfig,
    /// Menu items
    store: MenuStore,
    /// Application state manager
    state_manager: StateManager,
    /// Screen components
    home_screen: HomeScreen,
    add_screen: AddScreen,
    filter_screen: FilterScreen,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig, store: MenuStore) -> Self {
        Self {
            config,
            store,
            state_manager: StateManager::new(),
            home_screen: HomeScreen::new(),
            add_screen: AddScreen::new(),
            filter_screen: FilterScreen::new(),
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Screen currently shown
    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn home_screen(&self) -> &HomeScreen {
        &self.home_screen
    }

    pub fn add_screen(&self) -> &AddScreen {
        &self.add_screen
    }

    pub fn filter_screen(&self) -> &FilterScreen {
        &self.filter_screen
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.state_manager.current_state() {
            AppState::Home => self.home_screen.render(f, &self.store, &self.config),
            AppState::Add => self.add_screen.render(f),
            AppState::Filter => self.filter_screen.render(f, &self.store, &self.config),
        }
    }

    /// Handle a key press and update state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if StateManager::is_force_quit(&key) {
            self.state_manager.quit();
            return;
        }

        match self.state_manager.current_state() {
            AppState::Home => self.handle_home_screen_events(key),
            AppState::Add => self.handle_add_screen_events(key),
            AppState::Filter => self.handle_filter_screen_events(key),
        }
    }

    fn handle_home_screen_events(&mut self, key: KeyEvent) {
        let Some(command) = self.home_screen.handle_key_event(key, self.store.len()) else {
            return;
        };

        match command {
            HomeCommand::OpenAdd => {
                self.state_manager.transition_to(AppState::Add);
            }
            HomeCommand::OpenFilter => {
                self.state_manager.transition_to(AppState::Filter);
            }
            HomeCommand::RemoveSelected => {
                let selected = self.home_screen.selected_index();
                if let Some(id) = self.store.items().get(selected).map(|item| item.id.clone()) {
                    self.store.remove(&id);
                    self.home_screen.clamp_selection(self.store.len());
                }
            }
            HomeCommand::Quit => self.state_manager.quit(),
        }
    }

    fn handle_add_screen_events(&mut self, key: KeyEvent) {
        match self.add_screen.handle_key_event(key) {
            Some(AddCommand::Submit) => match self.store.add(self.add_screen.draft()) {
                Ok(_) => {
                    self.add_screen.clear_inputs();
                    self.state_manager.go_home();
                }
                Err(e) => {
                    // Stay on the form with the input intact
                    tracing::debug!(error = %e, "add rejected");
                }
            },
            Some(AddCommand::Cancel) => {
                self.state_manager.go_home();
            }
            None => {}
        }
    }

    fn handle_filter_screen_events(&mut self, key: KeyEvent) {
        let result_count = self.store.filter(self.filter_screen.active_filter()).len();
        match self.filter_screen.handle_key_event(key, result_count) {
            Some(FilterCommand::Back) => {
                self.state_manager.go_home();
            }
            Some(FilterCommand::Quit) => self.state_manager.quit(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_app() -> App {
        App::new(AppConfig::default(), MenuStore::seeded())
    }

    #[test]
    fn test_starts_on_home() {
        let app = seeded_app();
        assert_eq!(app.state(), AppState::Home);
        assert!(!app.should_quit());
        assert_eq!(app.store().len(), 6);
    }

    #[test]
    fn test_remove_selected_item() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.store().len(), 5);
        assert!(app.store().get("2").is_none());
        assert_eq!(app.home_screen().selected_index(), 1);
    }

    #[test]
    fn test_remove_last_item_moves_selection_up() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Up)); // wraps to last
        app.handle_key(key(KeyCode::Delete));
        assert_eq!(app.store().len(), 5);
        assert_eq!(app.home_screen().selected_index(), 4);
    }

    #[test]
    fn test_q_is_text_on_add_screen() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.add_screen().draft().name, "q");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
