//! Data models module
//!
//! Contains the menu item record, course categories and derived summaries.

pub mod item;

// Re-export commonly used types
pub use item::{
    Course,
    CourseAverages,
    CourseFilter,
    MenuItem,
    MenuItemDraft,
    ValidationError,
    MAX_PRICE,
};
