//! HTTP client for the credit search backend
//!
//! Posts a person's name to `POST /search` and maps the response onto
//! either a credit list or a [`CreditsError`]. There are no retries and,
//! unless configured, no timeout: a hung request stays pending.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

use crate::controller::CreditSource;
use crate::error::{CreditsError, Result};
use crate::outcome::GENERIC_ERROR;
use crate::types::Credit;
use crate::url::build_search_url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const USER_AGENT: &str = concat!("creditsearch/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (default: "http://127.0.0.1:5000")
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    name: &'a str,
}

/// HTTP client wrapper for the search endpoint
pub struct CreditsClient {
    client: reqwest::Client,
    search_url: Url,
}

impl CreditsClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an http(s) URL
    /// - `Http` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let search_url = build_search_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(CreditsError::Http)?;

        Ok(Self { client, search_url })
    }

    /// Absolute URL requests are posted to
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Search credits for a person
    ///
    /// # Arguments
    /// * `name` - Person's name; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// Credits in server order; may be empty
    ///
    /// # Errors
    /// - `EmptyName` if the name is empty after trimming (no request is sent)
    /// - `Api` for non-2xx responses, carrying the server's `error` text
    /// - `Http` if sending or reading the body fails
    /// - `Decode` if a body is not the expected JSON
    pub async fn search(&self, name: &str) -> Result<Vec<Credit>> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CreditsError::EmptyName);
        }

        debug!(name = trimmed, url = %self.search_url, "posting credit search");

        let response = self
            .client
            .post(self.search_url.clone())
            .json(&SearchRequest { name: trimmed })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "credit search request failed");
                CreditsError::Http(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body)?;
            warn!(%status, %message, "credit search rejected by server");
            return Err(CreditsError::Api { status, message });
        }

        let credits: Vec<Credit> = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "credit search returned an unexpected body");
            CreditsError::Decode(e)
        })?;

        debug!(count = credits.len(), "credit search completed");
        Ok(credits)
    }
}

impl CreditSource for CreditsClient {
    async fn search_credits(&self, name: &str) -> Result<Vec<Credit>> {
        self.search(name).await
    }
}

/// Extract the `error` field of a failure body
///
/// The body must be JSON; a missing, empty or non-string `error`
/// falls back to the generic message.
fn error_message(body: &[u8]) -> Result<String> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let message = value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_ERROR);
    Ok(message.to_string())
}
