//! The search view's persistent state.
//!
//! [`SearchSessionStore`] lives as long as the application. Navigating to a
//! document and back never touches it; only a new search resets it.

use crate::pagination;
use crate::request::{Resolution, SearchOutcome, SearchRequestController, SearchTicket};
use api::search::SearchResultItem;
use derive_more::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    query: String,
    /// Replaced wholesale, never edited in place
    results: Arc<[SearchResultItem]>,
    status: SearchStatus,
    error_message: Option<String>,
    current_page: usize,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Arc::from(Vec::new()),
            status: SearchStatus::Idle,
            error_message: None,
            current_page: 1,
        }
    }
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &Arc<[SearchResultItem]> {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

pub struct SearchSessionStore {
    session: SearchSession,
    page_size: usize,
    requests: SearchRequestController,
}

impl SearchSessionStore {
    pub fn new(page_size: usize, result_limit: usize) -> Self {
        Self {
            session: SearchSession::default(),
            page_size,
            requests: SearchRequestController::new(result_limit),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.session.status == SearchStatus::Loading
    }

    /// Reset the session for `query` and issue the request for it.
    ///
    /// Blank queries are rejected without touching any state.
    pub fn start_search(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            debug!("ignoring blank query");
            return None;
        }

        self.session = SearchSession {
            query: query.to_string(),
            status: SearchStatus::Loading,
            ..SearchSession::default()
        };

        Some(self.requests.issue(query))
    }

    /// Apply a resolved search. Returns `false` when the outcome was stale
    /// and has been dropped.
    pub fn resolve(&mut self, outcome: SearchOutcome) -> bool {
        match self.requests.resolve(outcome) {
            Resolution::Results(results) => {
                self.apply_results(results);
                true
            }
            Resolution::Error(message) => {
                self.apply_error(message);
                true
            }
            Resolution::Stale => false,
        }
    }

    fn apply_results(&mut self, results: Vec<SearchResultItem>) {
        info!(query = %self.session.query, hits = results.len(), "search finished");
        self.session.results = Arc::from(results);
        self.session.status = SearchStatus::Success;
        self.session.error_message = None;
        self.session.current_page = 1;
    }

    fn apply_error(&mut self, message: String) {
        warn!(query = %self.session.query, "{message}");
        self.session.results = Arc::from(Vec::new());
        self.session.status = SearchStatus::Error;
        self.session.error_message = Some(message);
    }

    /// Switch to page `n`. Pages outside `1..=page_count()` are ignored.
    pub fn set_page(&mut self, n: usize) -> bool {
        if n == 0 || n > self.page_count() {
            debug!(page = n, pages = self.page_count(), "ignoring out of range page");
            return false;
        }
        self.session.current_page = n;
        true
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.session.results.len(), self.page_size)
    }

    pub fn visible_results(&self) -> &[SearchResultItem] {
        pagination::page(
            &self.session.results,
            self.session.current_page,
            self.page_size,
        )
    }

    /// "Showing N of M results." for the current page, if there is anything
    /// to show.
    pub fn summary(&self) -> Option<String> {
        let total = self.session.results.len();
        if total == 0 {
            return None;
        }
        Some(format!(
            "Showing {} of {} results.",
            self.visible_results().len(),
            total
        ))
    }
}
