//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category.
///
/// The catalog carries a fixed small set of categories; filtering matches
/// on the exact display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
        Category::Sports,
    ];

    /// The display string, also used for case-sensitive filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
        }
    }

    /// Parse a category from its exact display string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product in the catalog.
///
/// Products are created once during catalog load and never mutated for
/// the remainder of the session. The catalog and the cart share them
/// behind `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Category.
    pub category: Category,
    /// Rating in [3.0, 5.0], one decimal of precision.
    pub rating: f64,
    /// Image URL.
    pub image: String,
    /// Full description.
    pub description: String,
}

impl Product {
    /// Format the price as a two-decimal dollar string.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Unicode star string, one star per full rating point.
    pub fn rating_stars(&self) -> String {
        "\u{2b50}".repeat(self.rating.floor() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Laptop - Premium Quality".to_string(),
            price: Money::from_cents(49999),
            category: Category::Electronics,
            rating: 4.2,
            image: "https://example.com/laptop.jpg".to_string(),
            description: "High-quality laptop.".to_string(),
        }
    }

    #[test]
    fn test_category_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("electronics"), None); // case-sensitive
        assert_eq!(Category::parse("Garden"), None);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(sample().price_display(), "$499.99");
    }

    #[test]
    fn test_rating_stars() {
        let mut p = sample();
        assert_eq!(p.rating_stars().chars().count(), 4);
        p.rating = 5.0;
        assert_eq!(p.rating_stars().chars().count(), 5);
        p.rating = 3.9;
        assert_eq!(p.rating_stars().chars().count(), 3);
    }
}
