//! Built-in seed catalog.
//!
//! The store ships with a fixed demo catalog; images start from a shared
//! stock photo and are replaced by enrichment at startup.

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};

const SEED_IMAGE: &str =
    "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?w=500&h=500&fit=crop";

fn product(
    id: &str,
    name: &str,
    rupees: i64,
    category: Category,
    description: &str,
) -> Product {
    Product::new(id, name, Money::new(rupees * 100, Currency::INR), category, description)
        .with_image(SEED_IMAGE)
}

/// The products the store is seeded with at startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Organic Wheat Seeds",
            499,
            Category::Seeds,
            "Premium organic wheat seeds specially selected for optimal yield and \
             disease resistance. Perfect for organic farming practices.",
        ),
        product(
            "2",
            "Premium Fertilizer",
            799,
            Category::Fertilizers,
            "A high-quality fertilizer designed to promote healthy plant growth and \
             increase crop yield.",
        ),
        product(
            "3",
            "Farm Tools Set",
            1499,
            Category::Tools,
            "A complete set of tools for all your farming needs, including a shovel, \
             hoe, and trowel.",
        ),
        product(
            "4",
            "Organic Pesticides",
            699,
            Category::Pesticides,
            "Organic pesticides made from natural ingredients to protect crops from \
             pests and diseases.",
        ),
        product(
            "5",
            "Rice Seeds Premium",
            899,
            Category::Seeds,
            "Premium rice seeds for high-quality rice production. Ideal for both wet \
             and dry planting methods.",
        ),
        product(
            "6",
            "Natural Compost",
            599,
            Category::Fertilizers,
            "A rich compost made from organic materials to improve soil fertility and \
             plant growth.",
        ),
        product(
            "7",
            "Garden Shovel Set",
            1299,
            Category::Tools,
            "A set of durable garden shovels for various farming tasks, including soil \
             preparation and planting.",
        ),
        product(
            "8",
            "Bio Pesticides",
            799,
            Category::Pesticides,
            "Bio pesticides made from natural ingredients to control pests and diseases \
             in crops.",
        ),
        product(
            "9",
            "Corn Seeds Hybrid",
            699,
            Category::Seeds,
            "Hybrid corn seeds for high yield and disease resistance. Suitable for \
             various planting methods.",
        ),
        product(
            "10",
            "NPK Fertilizer",
            899,
            Category::Fertilizers,
            "A balanced NPK fertilizer for promoting healthy plant growth and yield.",
        ),
        product(
            "11",
            "Pruning Tools Kit",
            1199,
            Category::Tools,
            "A complete pruning tools kit for maintaining and shaping your plants.",
        ),
        product(
            "12",
            "Neem Pesticides",
            499,
            Category::Pesticides,
            "Neem pesticides made from the neem tree for controlling pests and diseases \
             in crops.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_size() {
        assert_eq!(seed_products().len(), 12);
    }

    #[test]
    fn test_seed_ids_unique() {
        let products = seed_products();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_products_have_images() {
        for product in seed_products() {
            assert!(!product.image_url.is_empty());
            assert!(!product.description.is_empty());
        }
    }

    #[test]
    fn test_seed_prices_in_paise() {
        let products = seed_products();
        assert_eq!(products[0].price.amount_cents, 49900);
        assert_eq!(products[2].price.amount_cents, 149900);
    }
}
