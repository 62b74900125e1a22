//! In-memory page with a results region and an error region
//!
//! Implements both output ports so a controller can render into it
//! directly. Front ends that keep their own model (and tests) use it to
//! observe which of the three visual states is current.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::controller::{ErrorSink, ResultsSink};
use crate::render::CreditCard;

/// Visible state of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing shown yet
    Idle,
    /// This many cards are shown and the error region is hidden
    ShowingResults(usize),
    /// This message is shown and the results region is empty
    ShowingError(String),
}

#[derive(Debug, Default)]
struct Regions {
    cards: Vec<CreditCard>,
    error: Option<String>,
}

/// Results and error regions behind one lock
#[derive(Debug, Default)]
pub struct Page {
    regions: Mutex<Regions>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn regions(&self) -> MutexGuard<'_, Regions> {
        self.regions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cards currently in the results region
    pub fn cards(&self) -> Vec<CreditCard> {
        self.regions().cards.clone()
    }

    /// Text of the error region, if visible
    pub fn error(&self) -> Option<String> {
        self.regions().error.clone()
    }

    pub fn state(&self) -> ViewState {
        let regions = self.regions();
        match (&regions.error, regions.cards.len()) {
            (Some(message), _) => ViewState::ShowingError(message.clone()),
            (None, 0) => ViewState::Idle,
            (None, n) => ViewState::ShowingResults(n),
        }
    }
}

impl ResultsSink for Page {
    fn render_credits(&self, cards: &[CreditCard]) {
        self.regions().cards.extend_from_slice(cards);
    }

    fn clear_results(&self) {
        self.regions().cards.clear();
    }
}

impl ErrorSink for Page {
    fn set_error(&self, message: &str) {
        self.regions().error = Some(message.to_string());
    }

    fn clear_error(&self) {
        self.regions().error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_cards;
    use crate::types::Credit;

    #[test]
    fn test_new_page_is_idle() {
        let page = Page::new();
        assert_eq!(page.state(), ViewState::Idle);
        assert!(page.cards().is_empty());
        assert_eq!(page.error(), None);
    }

    #[test]
    fn test_render_credits_appends() {
        let page = Page::new();
        let cards = build_cards(&[Credit::new("Film A", "Movie", "Lead")]);

        page.render_credits(&cards);
        page.render_credits(&cards);

        assert_eq!(page.state(), ViewState::ShowingResults(2));
    }

    #[test]
    fn test_error_state_wins_over_cards() {
        let page = Page::new();
        page.render_credits(&build_cards(&[Credit::new("Film A", "Movie", "Lead")]));
        page.set_error("boom");
        assert_eq!(page.state(), ViewState::ShowingError("boom".to_string()));

        page.clear_error();
        assert_eq!(page.state(), ViewState::ShowingResults(1));

        page.clear_results();
        assert_eq!(page.state(), ViewState::Idle);
    }
}
