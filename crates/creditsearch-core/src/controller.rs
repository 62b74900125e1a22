//! Search form controller
//!
//! Binds a name input to a single credit lookup and presents exactly one
//! of {results, error} at a time through two injected output ports.
//! The controller owns no page state of its own.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::error::Result;
use crate::outcome::{EMPTY_NAME_MESSAGE, NO_CREDITS_MESSAGE, SearchOutcome, View};
use crate::render::{CreditCard, build_cards};
use crate::types::Credit;

/// Anything that can look up credits for a name
pub trait CreditSource {
    /// Look up credits for an already-trimmed, non-empty name
    fn search_credits(&self, name: &str) -> impl Future<Output = Result<Vec<Credit>>> + Send;
}

/// Output port for the results region
pub trait ResultsSink {
    /// Append cards to the results region, in order
    fn render_credits(&self, cards: &[CreditCard]);
    /// Remove every card from the results region
    fn clear_results(&self);
}

/// Output port for the error region
pub trait ErrorSink {
    /// Show the error region with this text
    fn set_error(&self, message: &str);
    /// Hide the error region
    fn clear_error(&self);
}

impl<T: CreditSource + Sync + ?Sized> CreditSource for &T {
    fn search_credits(&self, name: &str) -> impl Future<Output = Result<Vec<Credit>>> + Send {
        (**self).search_credits(name)
    }
}

impl<T: CreditSource + Send + Sync + ?Sized> CreditSource for Arc<T> {
    fn search_credits(&self, name: &str) -> impl Future<Output = Result<Vec<Credit>>> + Send {
        (**self).search_credits(name)
    }
}

impl<T: ResultsSink + ?Sized> ResultsSink for &T {
    fn render_credits(&self, cards: &[CreditCard]) {
        (**self).render_credits(cards)
    }

    fn clear_results(&self) {
        (**self).clear_results()
    }
}

impl<T: ResultsSink + ?Sized> ResultsSink for Arc<T> {
    fn render_credits(&self, cards: &[CreditCard]) {
        (**self).render_credits(cards)
    }

    fn clear_results(&self) {
        (**self).clear_results()
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for &T {
    fn set_error(&self, message: &str) {
        (**self).set_error(message)
    }

    fn clear_error(&self) {
        (**self).clear_error()
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for Arc<T> {
    fn set_error(&self, message: &str) {
        (**self).set_error(message)
    }

    fn clear_error(&self) {
        (**self).clear_error()
    }
}

/// Which response wins when searches overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every response is applied as it resolves; the last one to resolve wins
    #[default]
    LastResolvedWins,
    /// Only the most recently issued search may update the page
    LatestIssuedWins,
}

/// Monotonic token source shared by controllers rendering into one page
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: AtomicU64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new search
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the latest issued
    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

/// Search form controller
///
/// Triggers (a button click or Enter in the name field) all call
/// [`SearchController::execute_search`]. Nothing is debounced; overlapping
/// calls run independently and are resolved per [`ResponseOrdering`].
pub struct SearchController<S, R, E> {
    source: S,
    results: R,
    errors: E,
    ordering: ResponseOrdering,
    sequence: Arc<SearchSequence>,
}

impl<S, R, E> SearchController<S, R, E>
where
    S: CreditSource,
    R: ResultsSink,
    E: ErrorSink,
{
    pub fn new(source: S, results: R, errors: E) -> Self {
        Self {
            source,
            results,
            errors,
            ordering: ResponseOrdering::default(),
            sequence: Arc::new(SearchSequence::new()),
        }
    }

    /// Set how overlapping responses are resolved
    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Share a token sequence with other controllers writing to the same page
    pub fn with_sequence(mut self, sequence: Arc<SearchSequence>) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Run one search for the current field value and render its view
    ///
    /// Blank input is rejected locally without touching the source. It
    /// still counts as a trigger, so it supersedes searches in flight.
    ///
    /// # Returns
    /// The view that was rendered, or `None` when the response was
    /// discarded because a newer search had been issued
    pub async fn execute_search(&self, input: &str) -> Option<View> {
        let token = self.sequence.issue();
        let name = input.trim();
        if name.is_empty() {
            let view = View::error(EMPTY_NAME_MESSAGE);
            self.apply(&view);
            return Some(view);
        }

        let outcome = SearchOutcome::from_result(self.source.search_credits(name).await);

        if self.ordering == ResponseOrdering::LatestIssuedWins && !self.sequence.is_latest(token) {
            debug!(token, name, "discarding stale credit search response");
            return None;
        }

        let view = View::from(outcome);
        self.apply(&view);
        Some(view)
    }

    /// Render a view through the ports
    pub fn apply(&self, view: &View) {
        match view {
            View::Results(credits) => self.render_results(credits),
            View::Error(message) => self.render_error(message),
        }
    }

    /// Replace the results region with one card per credit and hide the error
    ///
    /// An empty list shows the no-credits message instead.
    pub fn render_results(&self, credits: &[Credit]) {
        if credits.is_empty() {
            self.render_error(NO_CREDITS_MESSAGE);
            return;
        }
        self.results.clear_results();
        self.errors.clear_error();
        self.results.render_credits(&build_cards(credits));
    }

    /// Show `message` and clear the results region
    pub fn render_error(&self, message: &str) {
        self.errors.set_error(message);
        self.results.clear_results();
    }
}
