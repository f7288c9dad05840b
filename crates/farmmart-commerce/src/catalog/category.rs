//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category. The storefront carries a fixed set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    Seeds,
    Fertilizers,
    Tools,
    Pesticides,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Seeds,
        Category::Fertilizers,
        Category::Tools,
        Category::Pesticides,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seeds => "Seeds",
            Category::Fertilizers => "Fertilizers",
            Category::Tools => "Tools",
            Category::Pesticides => "Pesticides",
            Category::Accessories => "Accessories",
        }
    }

    /// Parse a category label. Accepts the legacy "Vegetable Seeds"
    /// spelling so both product schemas load.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seeds" | "vegetable seeds" => Some(Category::Seeds),
            "fertilizers" => Some(Category::Fertilizers),
            "tools" => Some(Category::Tools),
            "pesticides" => Some(Category::Pesticides),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_legacy_alias() {
        assert_eq!(Category::from_str("Vegetable Seeds"), Some(Category::Seeds));
    }

    #[test]
    fn test_category_case_insensitive() {
        assert_eq!(Category::from_str("TOOLS"), Some(Category::Tools));
        assert_eq!(Category::from_str("pesticides"), Some(Category::Pesticides));
    }

    #[test]
    fn test_category_unknown() {
        assert_eq!(Category::from_str("Electronics"), None);
    }
}
