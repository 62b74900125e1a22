//! Credit Search Core Library
//!
//! Looks up a person's film and TV credits through a backend search
//! endpoint and renders them into a page with two mutually exclusive
//! regions: a list of credit cards, or a single error message.
//!
//! # Overview
//!
//! - [`CreditsClient`] posts `{"name": ...}` to `POST /search`
//! - [`SearchOutcome`] and [`View`] make every way a search can end explicit
//! - [`SearchController`] validates input, runs the lookup and renders the
//!   resulting view through the [`ResultsSink`] and [`ErrorSink`] ports
//! - [`Page`] is an in-memory implementation of both ports
//!
//! # Example
//!
//! ```no_run
//! use creditsearch_core::{CreditsClient, Page, SearchController, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CreditsClient::new()?;
//!     let page = Page::new();
//!     let controller = SearchController::new(&client, &page, &page);
//!
//!     controller.execute_search("Greta Gerwig").await;
//!
//!     for card in page.cards() {
//!         println!("{card}");
//!     }
//!     if let Some(message) = page.error() {
//!         eprintln!("{message}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod controller;
mod error;
mod outcome;
mod page;
mod render;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, CreditsClient};

// Re-export controller and ports
pub use controller::{
    CreditSource, ErrorSink, ResponseOrdering, ResultsSink, SearchController, SearchSequence,
};

// Re-export error types
pub use error::{CreditsError, Result};

// Re-export outcomes and messages
pub use outcome::{EMPTY_NAME_MESSAGE, GENERIC_ERROR, NO_CREDITS_MESSAGE, SearchOutcome, View};

// Re-export page model
pub use page::{Page, ViewState};

// Re-export card view model
pub use render::{CreditCard, NO_DESCRIPTION, PLATFORMS_HEADING, TrailerLink, build_cards};

// Re-export data types
pub use types::Credit;
