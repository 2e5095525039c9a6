//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Full menu with average prices
    #[default]
    Home,
    /// Form for a new menu item
    Add,
    /// Menu narrowed to one course
    Filter,
}

impl AppState {
    /// Check whether moving from this screen to `next` is allowed
    pub fn can_transition_to(&self, next: AppState) -> bool {
        matches!(
            (self, next),
            (AppState::Home, AppState::Add)
                | (AppState::Home, AppState::Filter)
                | (AppState::Add, AppState::Home)
                | (AppState::Filter, AppState::Home)
        )
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the home screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Home,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    ///
    /// Returns `false` and stays put when the move is not one of the
    /// allowed screen transitions.
    pub fn transition_to(&mut self, new_state: AppState) -> bool {
        if !self.current_state.can_transition_to(new_state) {
            tracing::debug!(from = ?self.current_state, to = ?new_state, "transition refused");
            return false;
        }
        tracing::debug!(from = ?self.current_state, to = ?new_state, "screen transition");
        self.current_state = new_state;
        true
    }

    /// Return to the home screen from Add or Filter
    pub fn go_home(&mut self) -> bool {
        self.transition_to(AppState::Home)
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }

    /// Check for the Ctrl+C chord, which quits from every screen
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Home);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_allowed_transitions() {
        let mut state_manager = StateManager::new();

        assert!(state_manager.transition_to(AppState::Add));
        assert_eq!(state_manager.current_state(), AppState::Add);
        assert!(state_manager.go_home());
        assert_eq!(state_manager.current_state(), AppState::Home);

        assert!(state_manager.transition_to(AppState::Filter));
        assert_eq!(state_manager.current_state(), AppState::Filter);
        assert!(state_manager.go_home());
        assert_eq!(state_manager.current_state(), AppState::Home);
    }

    #[test]
    fn test_refused_transitions() {
        let mut state_manager = StateManager::new();

        // Home has nowhere to go back to
        assert!(!state_manager.go_home());
        assert!(!state_manager.transition_to(AppState::Home));

        state_manager.transition_to(AppState::Add);
        assert!(!state_manager.transition_to(AppState::Filter));
        assert!(!state_manager.transition_to(AppState::Add));
        assert_eq!(state_manager.current_state(), AppState::Add);

        state_manager.go_home();
        state_manager.transition_to(AppState::Filter);
        assert!(!state_manager.transition_to(AppState::Add));
        assert_eq!(state_manager.current_state(), AppState::Filter);
    }

    #[test]
    fn test_transition_table() {
        let states = [AppState::Home, AppState::Add, AppState::Filter];
        let allowed: Vec<(AppState, AppState)> = states
            .iter()
            .flat_map(|from| states.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from.can_transition_to(*to))
            .collect();
        assert_eq!(
            allowed,
            vec![
                (AppState::Home, AppState::Add),
                (AppState::Home, AppState::Filter),
                (AppState::Add, AppState::Home),
                (AppState::Filter, AppState::Home),
            ]
        );
    }

    #[test]
    fn test_quit_flag() {
        let mut state_manager = StateManager::new();
        state_manager.quit();
        assert!(state_manager.should_quit());
        // Quitting is not a screen
        assert_eq!(state_manager.current_state(), AppState::Home);
    }

    #[test]
    fn test_key_to_navigation() {
        // Test quit keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            NavigationAction::None
        );

        // Test navigation keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            NavigationAction::Right
        );

        // Test selection and back keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );

        // Test tab navigation
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
    }

    #[test]
    fn test_force_quit_chord() {
        assert!(StateManager::is_force_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!StateManager::is_force_quit(&KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }
}
