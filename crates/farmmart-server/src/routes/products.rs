//! Catalog API handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use farmmart_commerce::catalog::{Category, Product};
use farmmart_commerce::money::{Currency, Money};
use farmmart_commerce::search::{search, PriceRange, SearchParams, SortOption};
use farmmart_commerce::ProductId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/products`.
///
/// Prices are whole rupees; formatting characters are stripped before
/// parsing, so `?max_price=1,499` works.
#[derive(Debug, Deserialize, Default)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

impl ProductQuery {
    fn into_params(self) -> Result<SearchParams, ApiError> {
        let mut params = SearchParams::new();

        if let Some(q) = self.q {
            params.query = q;
        }
        if let Some(raw) = self.category {
            let category = Category::from_str(&raw)
                .ok_or_else(|| ApiError::InvalidParameter(format!("category: {raw}")))?;
            params.categories.insert(category);
        }
        params.price_range = PriceRange::new(
            self.min_price.as_deref().map(parse_price).transpose()?,
            self.max_price.as_deref().map(parse_price).transpose()?,
        );
        if let Some(raw) = self.sort {
            params.sort = SortOption::from_str(&raw)
                .ok_or_else(|| ApiError::InvalidParameter(format!("sort: {raw}")))?;
        }

        Ok(params)
    }
}

/// Parse a whole-rupee price parameter, ignoring formatting characters.
fn parse_price(raw: &str) -> Result<Money, ApiError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let rupees: i64 = digits
        .parse()
        .map_err(|_| ApiError::InvalidParameter(format!("price: {raw}")))?;
    Ok(Money::new(rupees * 100, Currency::INR))
}

/// `GET /api/products`: search, filter, and sort the catalog.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let params = query.into_params()?;

    if !params.query.trim().is_empty() {
        if let Ok(mut history) = state.history.lock() {
            history.record(&params.query);
        }
    }

    let results = search(state.catalog.products(), &params);
    Ok(Json(results.into_iter().cloned().collect()))
}

/// `GET /api/products/{id}`: fetch one product, 404 when unknown.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get(&ProductId::new(&id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::ProductNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_list_all_products() {
        let state = test_state(None);
        let result = list_products(State(state), Query(ProductQuery::default()))
            .await
            .unwrap();
        assert_eq!(result.0.len(), 12);
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let state = test_state(None);
        let query = ProductQuery {
            category: Some("Tools".to_string()),
            ..Default::default()
        };

        let result = list_products(State(state), Query(query)).await.unwrap();
        assert!(!result.0.is_empty());
        assert!(result.0.iter().all(|p| p.category == Category::Tools));
    }

    #[tokio::test]
    async fn test_list_sorts_by_price() {
        let state = test_state(None);
        let query = ProductQuery {
            sort: Some("price-low".to_string()),
            ..Default::default()
        };

        let result = list_products(State(state), Query(query)).await.unwrap();
        let prices: Vec<i64> = result.0.iter().map(|p| p.price.amount_cents).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn test_list_records_search_history() {
        let state = test_state(None);
        let query = ProductQuery {
            q: Some("wheat".to_string()),
            ..Default::default()
        };

        list_products(State(state.clone()), Query(query))
            .await
            .unwrap();

        let history = state.history.lock().unwrap();
        assert_eq!(history.entries(), ["wheat"]);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_category() {
        let state = test_state(None);
        let query = ProductQuery {
            category: Some("Electronics".to_string()),
            ..Default::default()
        };

        let err = list_products(State(state), Query(query)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let state = test_state(None);
        let result = get_product(State(state), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(result.0.name, "Organic Wheat Seeds");
    }

    #[tokio::test]
    async fn test_get_product_unknown_is_not_found() {
        let state = test_state(None);
        let err = get_product(State(state), Path("999".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_parse_price_strips_formatting() {
        assert_eq!(parse_price("1,499").unwrap().amount_cents, 149900);
        assert_eq!(parse_price("\u{20b9}499").unwrap().amount_cents, 49900);
        assert!(parse_price("abc").is_err());
    }
}
