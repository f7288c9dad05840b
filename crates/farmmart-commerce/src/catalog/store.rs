//! Read-only in-memory catalog store.

use crate::catalog::{seed_products, Product};
use crate::ids::ProductId;

/// The product catalog, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog from the built-in seed data.
    pub fn seed() -> Self {
        Self::new(seed_products())
    }

    /// Look up a product by id. Unknown ids are a not-found state, not an
    /// error.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        let product = catalog.get(&ProductId::new("3")).unwrap();
        assert_eq!(product.name, "Farm Tools Set");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::seed();
        assert!(catalog.get(&ProductId::new("999")).is_none());
    }
}
