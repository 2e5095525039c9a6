//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod add;
pub mod filter;
pub mod home;

pub use add::{AddCommand, AddScreen, FormField};
pub use filter::{FilterCommand, FilterScreen};
pub use home::{HomeCommand, HomeScreen};

use crate::models::MenuItem;
use crate::util::format_price;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Accent used for borders and highlights across screens
pub(crate) const ACCENT: Color = Color::Cyan;

/// Multi-line list entry showing one menu item
pub(crate) fn menu_card(item: &MenuItem, currency_symbol: &str) -> ListItem<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format_price(currency_symbol, item.price),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            item.course.label(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    ListItem::new(lines)
}
