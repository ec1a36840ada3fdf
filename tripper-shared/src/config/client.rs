//! Client configuration
//!
//! Endpoints, the API key, and navigation targets used by the API client and
//! the page flows. Values are baked in at compile time through `option_env!`
//! so the WASM bundle needs no runtime configuration source.

use serde::{Deserialize, Serialize};

/// Default base URL of the travel journal API.
pub const DEFAULT_API_BASE_URL: &str = "https://travel-journal-api-bootcamp.do.dibimbing.id/api/v1";
/// Default API key sent in the `apiKey` header.
pub const DEFAULT_API_KEY: &str = "24405e01-fbc1-45a5-9f5a-be13afcd757c";
/// Default base URL of the demo product catalogue.
pub const DEFAULT_PRODUCTS_BASE_URL: &str = "https://fakestoreapi.com";
/// Default base URL of the demo todo service.
pub const DEFAULT_TODOS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Settings for talking to the remote services and routing between pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the travel journal API, without a trailing slash.
    pub api_base_url: String,
    /// Static API key attached to every travel API request.
    pub api_key: String,
    /// Base URL of the demo product catalogue.
    pub products_base_url: String,
    /// Base URL of the demo todo service.
    pub todos_base_url: String,
    /// Page that unauthenticated visitors are sent to.
    pub login_path: String,
    /// Page shown after a successful login.
    pub landing_path: String,
    /// Per-request timeout in seconds. Only honoured by native builds.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TRIPPER_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            api_key: option_env!("TRIPPER_API_KEY")
                .unwrap_or(DEFAULT_API_KEY)
                .to_string(),
            products_base_url: option_env!("TRIPPER_PRODUCTS_BASE_URL")
                .unwrap_or(DEFAULT_PRODUCTS_BASE_URL)
                .to_string(),
            todos_base_url: option_env!("TRIPPER_TODOS_BASE_URL")
                .unwrap_or(DEFAULT_TODOS_BASE_URL)
                .to_string(),
            login_path: "/login".to_string(),
            landing_path: "/home".to_string(),
            request_timeout_secs: Some(30),
        }
    }
}

impl ClientConfig {
    /// Create a configuration from the compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point every remote endpoint at a single origin. Used when the API and
    /// the demo services are served by the same host, as in tests.
    #[must_use]
    pub fn with_single_origin(mut self, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        self.api_base_url.clone_from(&origin);
        self.products_base_url.clone_from(&origin);
        self.todos_base_url = origin;
        self
    }

    /// Build a URL on the travel API.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        join(&self.api_base_url, path)
    }

    /// Build a URL on the demo product catalogue.
    #[must_use]
    pub fn products_url(&self, path: &str) -> String {
        join(&self.products_base_url, path)
    }

    /// Build a URL on the demo todo service.
    #[must_use]
    pub fn todos_url(&self, path: &str) -> String {
        join(&self.todos_base_url, path)
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
