//! Search parameters.

use crate::catalog::Category;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Preserve filter order (default).
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceLowHigh,
    /// Sort by price, high to low.
    PriceHighLow,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLowHigh => "price-low",
            SortOption::PriceHighLow => "price-high",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relevance" => Some(SortOption::Relevance),
            "price-low" => Some(SortOption::PriceLowHigh),
            "price-high" => Some(SortOption::PriceHighLow),
            "name-asc" => Some(SortOption::NameAsc),
            "name-desc" => Some(SortOption::NameDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }
}

/// An inclusive price range. An unset bound is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    /// Create a bounded range.
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// A range matching every price.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check whether a price falls within the range, bounds inclusive.
    pub fn contains(&self, price: &Money) -> bool {
        if let Some(min) = &self.min {
            if price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = &self.max {
            if price.amount_cents > max.amount_cents {
                return false;
            }
        }
        true
    }
}

/// The search surface's filter state.
///
/// Derived state: recomputed on every change and reset to defaults when
/// the surface closes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub query: String,
    /// Selected categories; empty means no category filter.
    pub categories: BTreeSet<Category>,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Result ordering.
    pub sort: SortOption,
}

impl SearchParams {
    /// Create default parameters (match everything, relevance order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Add a category to the filter set.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Reset to defaults, as when the search surface closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_sort_option_round_trip() {
        for sort in [
            SortOption::Relevance,
            SortOption::PriceLowHigh,
            SortOption::PriceHighLow,
            SortOption::NameAsc,
            SortOption::NameDesc,
        ] {
            assert_eq!(SortOption::from_str(sort.as_str()), Some(sort));
        }
    }

    #[test]
    fn test_sort_option_unknown() {
        assert_eq!(SortOption::from_str("best-selling"), None);
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let range = PriceRange::new(
            Some(Money::new(19900, Currency::INR)),
            Some(Money::new(29900, Currency::INR)),
        );

        assert!(range.contains(&Money::new(19900, Currency::INR)));
        assert!(range.contains(&Money::new(29900, Currency::INR)));
        assert!(range.contains(&Money::new(24900, Currency::INR)));
        assert!(!range.contains(&Money::new(19899, Currency::INR)));
        assert!(!range.contains(&Money::new(29901, Currency::INR)));
    }

    #[test]
    fn test_price_range_unbounded() {
        let range = PriceRange::unbounded();
        assert!(range.contains(&Money::new(0, Currency::INR)));
        assert!(range.contains(&Money::new(i64::MAX, Currency::INR)));
    }

    #[test]
    fn test_params_builder_and_reset() {
        let mut params = SearchParams::new()
            .with_query("wheat")
            .with_category(Category::Seeds)
            .with_sort(SortOption::PriceLowHigh);

        assert_eq!(params.query, "wheat");
        assert!(params.categories.contains(&Category::Seeds));

        params.reset();
        assert!(params.query.is_empty());
        assert!(params.categories.is_empty());
        assert_eq!(params.sort, SortOption::Relevance);
    }
}
