//! Output ports backed by webview events
//!
//! The webview owns the two regions. Each port call becomes one event:
//! an empty card list clears the results region and a `null` error
//! payload hides the error region.

use creditsearch_core::{CreditCard, ErrorSink, ResultsSink};
use tauri::{AppHandle, Emitter, Runtime};
use tracing::warn;

/// Event carrying the cards to show (empty list = cleared)
pub const RESULTS_EVENT: &str = "creditsearch://results";

/// Event carrying the error text (`null` = hidden)
pub const ERROR_EVENT: &str = "creditsearch://error";

/// Emits port calls to every webview of the app
pub struct EventSink<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> EventSink<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    fn emit<S: serde::Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.app.emit(event, payload) {
            warn!(event, error = %e, "failed to emit credit search event");
        }
    }
}

impl<R: Runtime> ResultsSink for EventSink<R> {
    fn render_credits(&self, cards: &[CreditCard]) {
        self.emit(RESULTS_EVENT, cards.to_vec());
    }

    fn clear_results(&self) {
        self.emit(RESULTS_EVENT, Vec::<CreditCard>::new());
    }
}

impl<R: Runtime> ErrorSink for EventSink<R> {
    fn set_error(&self, message: &str) {
        self.emit(ERROR_EVENT, Some(message.to_string()));
    }

    fn clear_error(&self) {
        self.emit(ERROR_EVENT, None::<String>);
    }
}
