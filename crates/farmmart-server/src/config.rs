//! Server configuration from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Runtime configuration.
///
/// Only the port is required to have a value; the API keys are optional
/// and their absence degrades the corresponding feature (placeholder
/// images, canned predictions, unavailable chat).
pub struct Config {
    /// Port the server binds on.
    pub port: u16,
    /// Key for the generative-model service.
    pub gemini_api_key: Option<String>,
    /// Override for the generative-model API base URL.
    pub gemini_api_base: Option<String>,
    /// Key for the image-search service.
    pub unsplash_access_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_api_base: non_empty_var("GEMINI_API_BASE"),
            unsplash_access_key: non_empty_var("UNSPLASH_ACCESS_KEY"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        // PORT is unlikely to be set in the test environment; when it is,
        // the parsed value must still be a valid u16.
        let config = Config::load();
        let _ = config.port;
    }

    #[test]
    fn test_non_empty_var_filters_blank() {
        env::set_var("FARMMART_TEST_BLANK", "   ");
        assert_eq!(non_empty_var("FARMMART_TEST_BLANK"), None);
        env::remove_var("FARMMART_TEST_BLANK");

        env::set_var("FARMMART_TEST_SET", " value ");
        assert_eq!(non_empty_var("FARMMART_TEST_SET"), Some("value".to_string()));
        env::remove_var("FARMMART_TEST_SET");
    }
}
