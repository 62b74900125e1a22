//! Credit Search Tauri Integration
//!
//! Provides a Tauri plugin that runs the search controller on behalf of a
//! webview. The results and error regions live in the webview; the plugin
//! drives them by emitting events.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(creditsearch_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then wire the search form in the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//! import { listen } from '@tauri-apps/api/event';
//!
//! await listen('creditsearch://results', (event) => renderCards(event.payload));
//! await listen('creditsearch://error', (event) => showOrHideError(event.payload));
//!
//! // On click or Enter
//! await invoke('plugin:creditsearch|search_credits', { name: input.value });
//! ```

use std::sync::Arc;

use creditsearch_core::{
    ClientConfig, CreditsClient, ResponseOrdering, SearchController, SearchSequence,
};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;
mod sink;

pub use sink::{ERROR_EVENT, EventSink, RESULTS_EVENT};

/// Shared plugin state
///
/// Holds one HTTP client for all commands and the token sequence that
/// lets overlapping searches from the same webview be ordered.
pub struct CreditsState {
    pub(crate) client: CreditsClient,
    pub(crate) sequence: Arc<SearchSequence>,
    pub(crate) ordering: ResponseOrdering,
}

impl CreditsState {
    /// Create a new CreditsState with default configuration
    ///
    /// # Errors
    /// Returns error string if the client cannot be built
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default(), ResponseOrdering::default())
    }

    /// Create a new CreditsState with custom configuration
    pub fn with_config(config: ClientConfig, ordering: ResponseOrdering) -> Result<Self, String> {
        let client = CreditsClient::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            client,
            sequence: Arc::new(SearchSequence::new()),
            ordering,
        })
    }

    /// Build a controller that renders into `sink`
    pub(crate) fn controller<'a, R: Runtime>(
        &'a self,
        sink: &'a EventSink<R>,
    ) -> SearchController<&'a CreditsClient, &'a EventSink<R>, &'a EventSink<R>> {
        SearchController::new(&self.client, sink, sink)
            .with_ordering(self.ordering)
            .with_sequence(self.sequence.clone())
    }
}

/// Initialize the creditsearch plugin with default configuration
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(creditsearch_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_config(ClientConfig::default(), ResponseOrdering::default())
}

/// Initialize the creditsearch plugin against a specific backend
pub fn init_with_config<R: Runtime>(
    config: ClientConfig,
    ordering: ResponseOrdering,
) -> TauriPlugin<R> {
    Builder::new("creditsearch")
        .invoke_handler(tauri::generate_handler![
            commands::search_credits,
            commands::fetch_credits
        ])
        .setup(move |app, _api| {
            let state = CreditsState::with_config(config.clone(), ordering)
                .map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use creditsearch_core::{Credit, CreditCard};
