//! Tauri commands for credit search
//!
//! This module contains all Tauri command implementations.

use creditsearch_core::Credit;
use tauri::{AppHandle, Runtime, State};

use crate::CreditsState;
use crate::sink::EventSink;

/// Run a search and render it into the webview
///
/// Called for both triggers of the search form (button click and Enter).
/// Results and errors reach the webview as events, never as the return
/// value; the command itself only fails if the state is missing.
///
/// # Arguments
/// * `app` - Handle used to emit region events
/// * `state` - Managed CreditsState from Tauri
/// * `name` - Raw value of the name field
#[tauri::command]
pub async fn search_credits<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, CreditsState>,
    name: String,
) -> Result<(), String> {
    let sink = EventSink::new(app);
    state.controller(&sink).execute_search(&name).await;
    Ok(())
}

/// Fetch raw credits without rendering
///
/// # Arguments
/// * `state` - Managed CreditsState from Tauri
/// * `name` - Person's name
///
/// # Returns
/// Credits in server order; may be empty
///
/// # Errors
/// Returns the error message as String if the lookup fails
#[tauri::command]
pub async fn fetch_credits(
    state: State<'_, CreditsState>,
    name: String,
) -> Result<Vec<Credit>, String> {
    state.client.search(&name).await.map_err(|e| e.to_string())
}
