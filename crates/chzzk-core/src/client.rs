//! HTTP client for the Chzzk service API
//!
//! A thin wrapper over `reqwest` that attaches the fixed headers and
//! maps non-success statuses to errors. One request per menu action,
//! no retries.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ChzzkError, Result};
use crate::url::BASE_URL;

/// Generic user agent; the API rejects requests without one
const USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service API (default: production Chzzk API)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper for the Chzzk service API
pub struct ChzzkClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChzzkClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ChzzkError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch a response body from a path on the service API
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g. "/service/v1/lives?limit=10&sortType=POPULAR")
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `Http` - Network error or timeout
    /// - `Status` - API answered with a non-success HTTP status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting live list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ChzzkError::Http)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %url, "API request rejected");
            return Err(ChzzkError::Status(status));
        }

        response.text().await.map_err(ChzzkError::Http)
    }
}
