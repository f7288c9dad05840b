//! Catalog image enrichment.
//!
//! Replaces each product's stock image with one fetched from an external
//! image-search service. Every failure degrades to a fixed per-category
//! placeholder; callers of catalog loading never see an error from here.

mod batch;
mod source;

pub use batch::{enrich_catalog, placeholder_for, search_query_for, MAX_CONCURRENT_FETCHES};
pub use source::{ImageSource, UnsplashClient};

use thiserror::Error;

/// Errors from the image-search service.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP response.
    #[error("Image service returned HTTP {status}")]
    Http { status: u16 },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
