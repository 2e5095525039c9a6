//! Menu store
//!
//! Owns the ordered collection of menu items and the queries derived from it.

use crate::models::{Course, CourseAverages, CourseFilter, MenuItem, MenuItemDraft, ValidationError};
use uuid::Uuid;

/// In-memory menu, ordered by insertion
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the house menu
    pub fn seeded() -> Self {
        Self {
            items: seed_items(),
        }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validate a draft and append it as a new item
    pub fn add(&mut self, draft: MenuItemDraft) -> Result<&MenuItem, ValidationError> {
        let (name, price) = draft.validate()?;
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name,
            course: draft.course,
            price,
            description: draft.description,
        };
        tracing::info!(id = %item.id, name = %item.name, course = %item.course, "menu item added");

        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Remove the first item with the given id
    ///
    /// Returns `false` and leaves the menu untouched when no item matches.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                tracing::info!(id = %removed.id, name = %removed.name, "menu item removed");
                true
            }
            None => {
                tracing::debug!(id, "remove requested for unknown item");
                false
            }
        }
    }

    /// Items passing the filter, in menu order
    pub fn filter(&self, filter: CourseFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Mean price per course, rounded to the nearest whole unit
    ///
    /// Courses without items average to 0.
    pub fn averages_by_course(&self) -> CourseAverages {
        let mut totals = [(0.0_f64, 0_usize); 4];
        for item in &self.items {
            let slot = &mut totals[item.course.index()];
            slot.0 += item.price;
            slot.1 += 1;
        }

        let mut averages = CourseAverages::default();
        for course in Course::all() {
            let (total, count) = totals[course.index()];
            if count > 0 {
                averages.set(course, (total / count as f64).round() as u64);
            }
        }
        averages
    }
}

fn seed_items() -> Vec<MenuItem> {
    let seed = [
        ("1", "Burger", Course::Main, 50.0, "Delicious grilled beef burger served on a fresh bun."),
        ("2", "Burger and Chips", Course::Main, 80.0, "Classic beef burger served with crispy golden chips."),
        ("3", "Large Chips", Course::Starter, 70.0, "Generous portion of hot and crispy chips."),
        ("4", "Burger Meal Combo", Course::Main, 120.0, "Burger, large chips, and a drink combo."),
        ("5", "Soft Drink", Course::Beverage, 25.0, "Refreshing cold beverage of your choice."),
        ("6", "Chocolate Milkshake", Course::Dessert, 45.0, "Thick creamy milkshake with rich chocolate flavor."),
    ];

    seed.into_iter()
        .map(|(id, name, course, price, description)| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            course,
            price,
            description: description.to_string(),
        })
        .collect()
}
