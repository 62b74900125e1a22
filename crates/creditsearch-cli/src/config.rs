use std::env;

use creditsearch_core::{ClientConfig, ResponseOrdering};

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub discard_stale: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ClientConfig::default();

        Self {
            base_url: lookup("CREDITSEARCH_BASE_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.base_url),
            timeout_secs: lookup("CREDITSEARCH_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0),
            discard_stale: lookup("CREDITSEARCH_DISCARD_STALE")
                .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..ClientConfig::default()
        }
    }

    pub fn ordering(&self) -> ResponseOrdering {
        if self.discard_stale {
            ResponseOrdering::LatestIssuedWins
        } else {
            ResponseOrdering::LastResolvedWins
        }
    }
}
