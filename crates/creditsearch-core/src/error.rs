//! Error types for credit search
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all credit search operations
///
/// The `Display` text of each variant is what ends up in the error region,
/// so server-provided messages are passed through verbatim.
#[derive(Error, Debug)]
pub enum CreditsError {
    /// Sending the request or reading the response body failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server answered with a non-success status
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Base URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Name was empty after trimming
    #[error("Please enter a person's name")]
    EmptyName,
}

impl Serialize for CreditsError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for credit search operations
pub type Result<T> = std::result::Result<T, CreditsError>;
