//! The search engine: pure filtering and ordering over the catalog.

use crate::catalog::Product;
use crate::search::{SearchParams, SortOption};

/// Filter and order products by the given parameters.
///
/// A product is included only if it passes the text, category, and price
/// predicates. An empty result set is a valid outcome, not a failure.
pub fn search<'a>(products: &'a [Product], params: &SearchParams) -> Vec<&'a Product> {
    let terms: Vec<String> = params
        .query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut results: Vec<&Product> = products
        .iter()
        .filter(|p| matches_terms(p, &terms))
        .filter(|p| params.categories.is_empty() || params.categories.contains(&p.category))
        .filter(|p| params.price_range.contains(&p.price))
        .collect();

    sort_results(&mut results, params.sort);
    results
}

/// Every term must appear in at least one of name, category, or
/// description.
fn matches_terms(product: &Product, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let name = product.name.to_lowercase();
    let category = product.category.as_str().to_lowercase();
    let description = product.description.to_lowercase();

    terms.iter().all(|term| {
        name.contains(term.as_str())
            || category.contains(term.as_str())
            || description.contains(term.as_str())
    })
}

fn sort_results(results: &mut [&Product], sort: SortOption) {
    match sort {
        // Relevance preserves filter order.
        SortOption::Relevance => {}
        SortOption::PriceLowHigh => {
            results.sort_by_key(|p| p.price.amount_cents);
        }
        SortOption::PriceHighLow => {
            results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
        }
        SortOption::NameAsc => {
            results.sort_by_key(|p| p.name.to_lowercase());
        }
        SortOption::NameDesc => {
            results.sort_by_key(|p| std::cmp::Reverse(p.name.to_lowercase()));
        }
    }
}
