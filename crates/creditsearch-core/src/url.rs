//! URL helper functions for the search backend
//!
//! Resolves the `/search` endpoint against a configurable base URL.

use reqwest::Url;

use crate::error::{CreditsError, Result};

/// Path of the search endpoint relative to the base URL
pub const SEARCH_PATH: &str = "search";

/// Builds the search endpoint URL from a base URL
///
/// The base may carry a path prefix (e.g. when the backend is mounted
/// under `/credits`); the prefix is kept and `search` is appended to it.
///
/// # Arguments
/// * `base_url` - Scheme and host of the backend, optionally with a path prefix
///
/// # Returns
/// Absolute URL of the search endpoint
///
/// # Errors
/// Returns `InvalidUrl` if the base cannot be parsed or is not an http(s) URL
///
/// # Example
/// ```
/// use creditsearch_core::url::build_search_url;
/// let url = build_search_url("http://localhost:5000").unwrap();
/// assert_eq!(url.as_str(), "http://localhost:5000/search");
/// ```
pub fn build_search_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let mut base =
        Url::parse(trimmed).map_err(|e| CreditsError::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(CreditsError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme"
        )));
    }

    // Url::join replaces the last segment unless the path ends with '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);

    base.join(SEARCH_PATH)
        .map_err(|e| CreditsError::InvalidUrl(format!("{trimmed}: {e}")))
}
