//! E-commerce domain types and logic for FarmMart.
//!
//! This crate holds the storefront's core state, free of any I/O:
//!
//! - **Catalog**: products, categories, the built-in seed catalog
//! - **Cart**: session shopping cart with quantities and totals
//! - **Search**: free-text filter/sort over the catalog, bounded history
//!
//! # Example
//!
//! ```rust,ignore
//! use farmmart_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let mut cart = Cart::new();
//!
//! if let Some(product) = catalog.get(&ProductId::new("1")) {
//!     cart.add(product);
//! }
//!
//! println!("Total: {}", cart.total().display());
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;
pub mod search;

pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartSummary};

    // Search
    pub use crate::search::{search, PriceRange, SearchHistory, SearchParams, SortOption};
}
