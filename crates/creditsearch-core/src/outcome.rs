//! Search outcomes and the views they map to
//!
//! Every way a search can end is an explicit [`SearchOutcome`] variant.
//! A single mapping step turns an outcome into a [`View`], which is the
//! only thing the rendering side ever sees.

use crate::error::{CreditsError, Result};
use crate::types::Credit;

/// Shown when the name field is empty after trimming
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a person's name";

/// Shown when a successful search returns no credits
pub const NO_CREDITS_MESSAGE: &str = "No credits found for this person";

/// Fallback when an error carries no usable text
pub const GENERIC_ERROR: &str = "An error occurred";

/// How a search that reached the credit source ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one credit was returned
    Found(Vec<Credit>),
    /// The server answered successfully with an empty list
    EmptyResult,
    /// The server answered with a failure status
    HttpError(String),
    /// Sending, reading or decoding failed
    TransportError(String),
}

impl SearchOutcome {
    /// Classify the result of a credit source call
    pub fn from_result(result: Result<Vec<Credit>>) -> Self {
        match result {
            Ok(credits) if credits.is_empty() => SearchOutcome::EmptyResult,
            Ok(credits) => SearchOutcome::Found(credits),
            Err(CreditsError::Api { message, .. }) => SearchOutcome::HttpError(message),
            Err(e) => SearchOutcome::TransportError(e.to_string()),
        }
    }
}

impl From<Result<Vec<Credit>>> for SearchOutcome {
    fn from(result: Result<Vec<Credit>>) -> Self {
        SearchOutcome::from_result(result)
    }
}

/// What the page should display after a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Render these credits, hiding the error region
    Results(Vec<Credit>),
    /// Show this message, clearing the results region
    Error(String),
}

impl View {
    /// Build an error view, substituting the generic message for blank text
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            View::Error(GENERIC_ERROR.to_string())
        } else {
            View::Error(message)
        }
    }
}

impl From<SearchOutcome> for View {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(credits) => View::Results(credits),
            SearchOutcome::EmptyResult => View::error(NO_CREDITS_MESSAGE),
            SearchOutcome::HttpError(message) | SearchOutcome::TransportError(message) => {
                View::error(message)
            }
        }
    }
}
