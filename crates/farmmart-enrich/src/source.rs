//! Image source trait and the Unsplash-backed implementation.

use crate::EnrichError;
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_API_BASE: &str = "https://api.unsplash.com";

/// Something that can resolve a search query to an image URL.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch a representative image URL for the given query.
    async fn image_for(&self, query: &str) -> Result<String, EnrichError>;
}

/// Unsplash random-photo client.
pub struct UnsplashClient {
    http: reqwest::Client,
    api_base: String,
    access_key: String,
}

impl UnsplashClient {
    /// Create a client with the given access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            access_key: access_key.into(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[async_trait]
impl ImageSource for UnsplashClient {
    async fn image_for(&self, query: &str) -> Result<String, EnrichError> {
        let url = format!("{}/photos/random", self.api_base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query),
                ("orientation", "landscape"),
                ("client_id", &self.access_key),
            ])
            .send()
            .await
            .map_err(|e| EnrichError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::Http {
                status: status.as_u16(),
            });
        }

        let photo: RandomPhoto = response
            .json()
            .await
            .map_err(|e| EnrichError::Parse(e.to_string()))?;

        Ok(photo.urls.regular)
    }
}
