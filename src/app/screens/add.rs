//! Add item screen implementation
//!
//! A small form collecting name, price, course and description for a new
//! menu item. Validation happens in the store on submit.

use super::ACCENT;
use crate::models::{Course, MenuItemDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Requests the add screen hands back to the app controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCommand {
    Submit,
    Cancel,
}

/// Represents a single input field in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Course,
    Description,
}

impl FormField {
    fn all() -> [Self; 4] {
        [Self::Name, Self::Price, Self::Course, Self::Description]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Name => "Item name",
            Self::Price => "Price",
            Self::Course => "Select Course",
            Self::Description => "Description",
        }
    }
}

/// Add item form component
#[derive(Debug, Default)]
pub struct AddScreen {
    name: String,
    price: String,
    course: Course,
    description: String,
    focused_index: usize,
}

impl AddScreen {
    /// Create an empty form with the course preset to Main
    pub fn new() -> Self {
        Self::default()
    }

    /// Field that currently receives typed input
    pub fn focused_field(&self) -> FormField {
        FormField::all()[self.focused_index]
    }

    /// Snapshot of the form as an add request
    pub fn draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name.clone(),
            course: self.course,
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    /// Clear the text inputs after a successful add
    ///
    /// The chosen course is kept for the next entry.
    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.price.clear();
        self.description.clear();
        self.focused_index = 0;
    }

    /// Handle key events for the add screen
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AddCommand> {
        match key.code {
            KeyCode::Esc => return Some(AddCommand::Cancel),
            KeyCode::Enter => return Some(AddCommand::Submit),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Left if self.focused_field() == FormField::Course => {
                self.course = self.course.previous();
            }
            KeyCode::Right if self.focused_field() == FormField::Course => {
                self.course = self.course.next();
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn focus_next(&mut self) {
        self.focused_index = (self.focused_index + 1) % FormField::all().len();
    }

    fn focus_previous(&mut self) {
        let count = FormField::all().len();
        self.focused_index = (self.focused_index + count - 1) % count;
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            FormField::Name => Some(&mut self.name),
            FormField::Price => Some(&mut self.price),
            FormField::Description => Some(&mut self.description),
            FormField::Course => None,
        }
    }

    /// Render the add screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Name
                Constraint::Length(3), // Price
                Constraint::Length(3), // Course
                Constraint::Min(4),    // Description
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Add Menu Item")
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_text_field(f, chunks[1], FormField::Name, &self.name);
        self.render_text_field(f, chunks[2], FormField::Price, &self.price);
        self.render_course_field(f, chunks[3]);
        self.render_text_field(f, chunks[4], FormField::Description, &self.description);

        let help = Paragraph::new("Tab/↑↓: Field | ←→: Course | Enter: Add to Menu | Esc: Back to Home")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[5]);
    }

    fn field_block(&self, field: FormField) -> Block<'static> {
        let border = if self.focused_field() == field {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .title(field.title())
            .border_style(border)
    }

    fn render_text_field(&self, f: &mut Frame, area: Rect, field: FormField, value: &str) {
        let text = if self.focused_field() == field {
            format!("{}_", value)
        } else {
            value.to_string()
        };
        let input = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(self.field_block(field));
        f.render_widget(input, area);
    }

    fn render_course_field(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for course in Course::all() {
            let style = if course == self.course {
                Style::default()
                    .bg(ACCENT)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", course.label()), style));
            spans.push(Span::raw(" "));
        }
        let courses = Paragraph::new(Line::from(spans)).block(self.field_block(FormField::Course));
        f.render_widget(courses, area);
    }
}
