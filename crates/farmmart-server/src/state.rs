//! Shared application state.

use std::sync::{Arc, Mutex};

use farmmart_assist::{Assistant, AssistantClient, MockDiseasePredictor};
use farmmart_commerce::catalog::{seed_products, Catalog};
use farmmart_commerce::search::SearchHistory;
use farmmart_enrich::{enrich_catalog, UnsplashClient};
use tracing::info;

use crate::config::Config;

pub struct AppState {
    /// The enriched, read-only product catalog.
    pub catalog: Catalog,
    /// Generative model, when a key is configured.
    pub assistant: Option<Arc<dyn Assistant>>,
    /// Canned predictor backing predict-disease without a model.
    pub predictor: MockDiseasePredictor,
    /// Recent catalog search queries.
    pub history: Mutex<SearchHistory>,
}

impl AppState {
    pub async fn new(config: &Config) -> Arc<Self> {
        let products = seed_products();

        let products = match &config.unsplash_access_key {
            Some(key) => {
                info!("Enriching catalog images...");
                let source = UnsplashClient::new(key.clone());
                enrich_catalog(products, &source).await
            }
            None => {
                info!("No image-search key configured, keeping stock images");
                products
            }
        };

        let assistant: Option<Arc<dyn Assistant>> = config.gemini_api_key.as_ref().map(|key| {
            let mut client = AssistantClient::new(key.clone());
            if let Some(base) = &config.gemini_api_base {
                client = client.with_api_base(base.clone());
            }
            Arc::new(client) as Arc<dyn Assistant>
        });
        if assistant.is_none() {
            info!("No model key configured, chat disabled and predictions canned");
        }

        Arc::new(Self {
            catalog: Catalog::new(products),
            assistant,
            predictor: MockDiseasePredictor,
            history: Mutex::new(SearchHistory::new()),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_state(assistant: Option<Arc<dyn Assistant>>) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: Catalog::seed(),
        assistant,
        predictor: MockDiseasePredictor,
        history: Mutex::new(SearchHistory::new()),
    })
}
