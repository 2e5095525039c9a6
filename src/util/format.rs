//! Display formatting utilities
//!
//! Renders prices with the configured currency prefix and builds the
//! small headings used across screens.

/// Format a price with its currency prefix
///
/// Whole amounts print without decimals.
///
/// # Examples
/// ```
/// use menuboard::util::format::format_price;
///
/// assert_eq!(format_price("R", 50.0), "R50");
/// assert_eq!(format_price("R", 12.5), "R12.5");
/// assert_eq!(format_price("$", 0.0), "$0");
/// ```
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{}{}", symbol, price)
}

/// Format an already-rounded average with its currency prefix
///
/// # Examples
/// ```
/// use menuboard::util::format::format_rounded_price;
///
/// assert_eq!(format_rounded_price("R", 83), "R83");
/// ```
pub fn format_rounded_price(symbol: &str, amount: u64) -> String {
    format!("{}{}", symbol, amount)
}

/// Heading followed by an item count, e.g. "mains (3)"
pub fn format_count_heading(heading: &str, count: usize) -> String {
    format!("{} ({})", heading, count)
}
