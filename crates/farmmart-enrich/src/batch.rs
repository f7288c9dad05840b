//! Batch enrichment over the whole catalog.

use crate::ImageSource;
use farmmart_commerce::catalog::{Category, Product};
use farmmart_commerce::ProductId;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;

/// How many image fetches run at once.
pub const MAX_CONCURRENT_FETCHES: usize = 8;

/// The search query sent to the image service for a product.
pub fn search_query_for(product: &Product) -> String {
    format!("{} {}", product.name, product.category.as_str())
}

/// The fixed placeholder image for a category.
///
/// Deterministic: the same category always yields the same URL.
pub fn placeholder_for(category: Category) -> &'static str {
    match category {
        Category::Seeds => {
            "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?w=500&h=500&fit=crop"
        }
        Category::Fertilizers => {
            "https://images.unsplash.com/photo-1585320806297-9794b3e4eeae?w=500&h=500&fit=crop"
        }
        Category::Tools | Category::Pesticides | Category::Accessories => {
            "https://images.unsplash.com/photo-1589998059171-988d887df646?w=500&h=500&fit=crop"
        }
    }
}

/// Fetch images for a whole product list.
///
/// Requests run concurrently but independently; a product whose fetch
/// fails gets its category placeholder and the rest of the batch is
/// unaffected. Results are matched back to products by id, so completion
/// order does not matter.
pub async fn enrich_catalog(products: Vec<Product>, source: &dyn ImageSource) -> Vec<Product> {
    let fetches = products.iter().map(|product| {
        let id = product.id.clone();
        let category = product.category;
        let query = search_query_for(product);
        async move {
            let url = match source.image_for(&query).await {
                Ok(url) => url,
                Err(err) => {
                    tracing::warn!(product = %id, error = %err, "image fetch failed, using placeholder");
                    placeholder_for(category).to_string()
                }
            };
            (id, url)
        }
    });

    let resolved: HashMap<ProductId, String> = stream::iter(fetches)
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    products
        .into_iter()
        .map(|mut product| {
            if let Some(url) = resolved.get(&product.id) {
                product.image_url = url.clone();
            }
            product
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnrichError;
    use async_trait::async_trait;
    use farmmart_commerce::money::{Currency, Money};

    /// Source that fails for queries containing a marker word.
    struct FlakySource {
        fail_on: &'static str,
    }

    #[async_trait]
    impl ImageSource for FlakySource {
        async fn image_for(&self, query: &str) -> Result<String, EnrichError> {
            if query.contains(self.fail_on) {
                Err(EnrichError::Http { status: 503 })
            } else {
                Ok(format!("https://img.example/{}", query.replace(' ', "-")))
            }
        }
    }

    fn product(id: &str, name: &str, category: Category) -> Product {
        Product::new(
            id,
            name,
            Money::new(49900, Currency::INR),
            category,
            "Test product.",
        )
        .with_image("https://img.example/original")
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_to_placeholder() {
        let products = vec![
            product("1", "Organic Wheat Seeds", Category::Seeds),
            product("2", "Premium Fertilizer", Category::Fertilizers),
        ];
        let source = FlakySource {
            fail_on: "Fertilizer",
        };

        let enriched = enrich_catalog(products, &source).await;

        assert_eq!(
            enriched[0].image_url,
            "https://img.example/Organic-Wheat-Seeds-Seeds"
        );
        assert_eq!(
            enriched[1].image_url,
            placeholder_for(Category::Fertilizers)
        );
    }

    #[tokio::test]
    async fn test_batch_preserves_product_order() {
        let products = vec![
            product("1", "Seeds", Category::Seeds),
            product("2", "Tools", Category::Tools),
            product("3", "Neem", Category::Pesticides),
        ];
        let source = FlakySource { fail_on: "never" };

        let enriched = enrich_catalog(products, &source).await;
        let ids: Vec<&str> = enriched.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_all_failures_still_complete() {
        let products = vec![
            product("1", "Seeds", Category::Seeds),
            product("2", "Tools", Category::Tools),
        ];
        let source = FlakySource { fail_on: "" };

        let enriched = enrich_catalog(products, &source).await;
        assert_eq!(enriched[0].image_url, placeholder_for(Category::Seeds));
        assert_eq!(enriched[1].image_url, placeholder_for(Category::Tools));
    }

    #[test]
    fn test_placeholder_deterministic() {
        assert_eq!(
            placeholder_for(Category::Seeds),
            placeholder_for(Category::Seeds)
        );
    }
}
