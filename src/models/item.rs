//! Menu item data models
//!
//! Contains the menu item record, course categories, the add-form draft
//! and the per-course price summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted price, keeps course averages exact in a `u64`
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// Course category a menu item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    Starter,
    Main,
    Dessert,
    Beverage,
}

impl Course {
    /// All courses in display order
    pub fn all() -> [Course; 4] {
        [Course::Starter, Course::Main, Course::Dessert, Course::Beverage]
    }

    /// Lowercase identifier, as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "starter",
            Course::Main => "main",
            Course::Dessert => "dessert",
            Course::Beverage => "beverage",
        }
    }

    /// Capitalized singular label, e.g. "Starter"
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
        }
    }

    /// Capitalized plural heading used in the averages panel
    pub fn plural_label(&self) -> &'static str {
        match self {
            Course::Starter => "Starters",
            Course::Main => "Mains",
            Course::Dessert => "Desserts",
            Course::Beverage => "Beverages",
        }
    }

    /// Next course in display order, wrapping
    pub fn next(&self) -> Course {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous course in display order, wrapping
    pub fn previous(&self) -> Course {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Course::Starter => 0,
            Course::Main => 1,
            Course::Dessert => 2,
            Course::Beverage => 3,
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::Main
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Course::Starter),
            "main" => Ok(Course::Main),
            "dessert" => Ok(Course::Dessert),
            "beverage" => Ok(Course::Beverage),
            other => Err(format!("Unknown course: {}", other)),
        }
    }
}

/// Course selection for the filter view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// All filter options in display order
    pub fn all() -> [CourseFilter; 5] {
        [
            CourseFilter::All,
            CourseFilter::Only(Course::Starter),
            CourseFilter::Only(Course::Main),
            CourseFilter::Only(Course::Dessert),
            CourseFilter::Only(Course::Beverage),
        ]
    }

    /// Check whether an item passes this filter
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(course) => item.course == *course,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All Items",
            CourseFilter::Only(Course::Starter) => "Starters",
            CourseFilter::Only(Course::Main) => "Main Courses",
            CourseFilter::Only(Course::Dessert) => "Desserts",
            CourseFilter::Only(Course::Beverage) => "Beverages",
        }
    }

    /// Heading shown above the filtered results
    pub fn heading(&self) -> String {
        match self {
            CourseFilter::All => "All Menu Items".to_string(),
            CourseFilter::Only(course) => format!("{}s", course.as_str()),
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

/// A single dish or drink on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Unique identifier, fixed at creation
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Course category
    pub course: Course,
    /// Non-negative price in whole currency units
    pub price: f64,
    /// Free-text description, may be empty
    pub description: String,
}

impl MenuItem {
    /// Every field as a `key: value` line, in declaration order
    pub fn details(&self) -> String {
        format!(
            "id: {}\nname: {}\ncourse: {}\nprice: {}\ndescription: {}\n",
            self.id, self.name, self.course, self.price, self.description
        )
    }
}

/// Raw add-form input, validated by the store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItemDraft {
    pub name: String,
    pub course: Course,
    /// Unparsed price text as typed
    pub price: String,
    pub description: String,
}

impl MenuItemDraft {
    pub fn new(name: impl Into<String>, course: Course, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course,
            price: price.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check required fields and parse the price
    ///
    /// Returns the trimmed name and the parsed price.
    pub fn validate(&self) -> Result<(String, f64), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            return Err(ValidationError::MissingPrice);
        }

        let price: f64 = raw_price
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(raw_price.to_string()))?;
        if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
            return Err(ValidationError::InvalidPrice(raw_price.to_string()));
        }

        // "-0" parses to negative zero
        Ok((name.to_string(), price.abs()))
    }
}

/// Reasons an add request is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("item name is empty")]
    EmptyName,
    #[error("item price is missing")]
    MissingPrice,
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

/// Average price per course, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseAverages {
    pub starter: u64,
    pub main: u64,
    pub dessert: u64,
    pub beverage: u64,
}

impl CourseAverages {
    /// Average for one course
    pub fn get(&self, course: Course) -> u64 {
        match course {
            Course::Starter => self.starter,
            Course::Main => self.main,
            Course::Dessert => self.dessert,
            Course::Beverage => self.beverage,
        }
    }

    pub(crate) fn set(&mut self, course: Course, value: u64) {
        match course {
            Course::Starter => self.starter = value,
            Course::Main => self.main = value,
            Course::Dessert => self.dessert = value,
            Course::Beverage => self.beverage = value,
        }
    }
}
