//! Product record.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded for the session; image enrichment
/// replaces `image_url` before the catalog is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Money,
    /// Category this product belongs to.
    pub category: Category,
    /// Full description for listings and detail pages.
    pub description: String,
    /// URL of the representative image.
    pub image_url: String,
    /// Units in stock, if tracked.
    pub stock: Option<i64>,
    /// Average customer rating, if any.
    pub rating: Option<f64>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            description: description.into(),
            image_url: String::new(),
            stock: None,
            rating: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the average rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Check if the product can currently be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock.map(|s| s > 0).unwrap_or(true)
    }
}
