//! Issuing searches and deciding which outcome is still authoritative.
//!
//! Overlapping requests are not cancelled. Every request carries the sequence
//! number it was issued with, and only the outcome of the latest one is allowed
//! through; anything older is dropped when it resolves.

use api::search::SearchResultItem;
use api::{Endpoint, SearchService, ServiceError};
use derive_more::Display;
use tracing::debug;

/// Monotonic tag assigned to a search at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("#{_0}")]
pub struct SearchSeq(u64);

/// A search that has been issued and still has to be executed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: SearchSeq,
    pub query: String,
    pub limit: usize,
}

impl SearchTicket {
    pub async fn run<S>(self, service: &S) -> SearchOutcome
    where
        S: SearchService + ?Sized,
    {
        let result = service.search(&self.query, self.limit).await;
        SearchOutcome {
            seq: self.seq,
            result,
        }
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub seq: SearchSeq,
    pub result: Result<Vec<SearchResultItem>, ServiceError>,
}

/// What the session should do with a resolved search.
#[derive(Debug, PartialEq)]
pub enum Resolution {
    Results(Vec<SearchResultItem>),
    Error(String),
    /// Superseded by a later request
    Stale,
}

#[derive(Debug)]
pub struct SearchRequestController {
    /// Highest sequence number issued so far, 0 when nothing was issued
    latest: u64,
    limit: usize,
}

impl SearchRequestController {
    pub fn new(limit: usize) -> Self {
        Self { latest: 0, limit }
    }

    pub fn issue(&mut self, query: &str) -> SearchTicket {
        self.latest += 1;
        let seq = SearchSeq(self.latest);
        debug!(%seq, query, "search issued");

        SearchTicket {
            seq,
            query: query.to_string(),
            limit: self.limit,
        }
    }

    pub fn latest(&self) -> Option<SearchSeq> {
        (self.latest > 0).then_some(SearchSeq(self.latest))
    }

    pub fn is_authoritative(&self, seq: SearchSeq) -> bool {
        self.latest() == Some(seq)
    }

    pub fn resolve(&self, outcome: SearchOutcome) -> Resolution {
        if !self.is_authoritative(outcome.seq) {
            debug!(seq = %outcome.seq, latest = self.latest, "discarding stale search outcome");
            return Resolution::Stale;
        }

        match outcome.result {
            Ok(results) => Resolution::Results(results),
            Err(e) => Resolution::Error(e.user_message(Endpoint::Search)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(seq: SearchSeq) -> SearchOutcome {
        SearchOutcome {
            seq,
            result: Ok(vec![]),
        }
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut controller = SearchRequestController::new(100);
        assert_eq!(controller.latest(), None);

        let a = controller.issue("wing");
        let b = controller.issue("wing");
        assert!(b.seq > a.seq);
        assert_eq!(controller.latest(), Some(b.seq));
        assert_eq!(b.limit, 100);
    }

    #[test]
    fn test_only_latest_is_authoritative() {
        let mut controller = SearchRequestController::new(100);
        let a = controller.issue("first");
        let b = controller.issue("second");

        assert_eq!(controller.resolve(ok(a.seq)), Resolution::Stale);
        assert_eq!(controller.resolve(ok(b.seq)), Resolution::Results(vec![]));
    }

    #[test]
    fn test_error_is_mapped_to_search_message() {
        let mut controller = SearchRequestController::new(100);
        let ticket = controller.issue("x");

        let resolution = controller.resolve(SearchOutcome {
            seq: ticket.seq,
            result: Err(ServiceError::Http {
                status: 400,
                message: "bad query".into(),
            }),
        });

        assert_eq!(
            resolution,
            Resolution::Error("Search failed: bad query.".into())
        );
    }
}
