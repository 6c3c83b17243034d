//! Per-visit document fetching.
//!
//! Every mounted detail view owns one [`DocumentFetchController`]. Nothing is
//! shared between visits, so opening the same document twice fetches it twice.

use api::search::{DocId, DocumentRecord};
use api::{Endpoint, SearchService, ServiceError};
use derive_more::Display;
use tracing::{debug, info, warn};

/// Identity of one mounted lifetime of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("visit#{_0}")]
pub struct VisitId(u64);

impl VisitId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DocumentFetchState {
    #[default]
    Idle,
    Loading,
    Success(DocumentRecord),
    Error(String),
}

impl DocumentFetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTicket {
    pub visit: VisitId,
    /// Bumped every time the mounted instance restarts its fetch
    pub attempt: u32,
    pub doc_id: DocId,
}

impl DocumentTicket {
    pub async fn run<S>(self, service: &S) -> DocumentOutcome
    where
        S: SearchService + ?Sized,
    {
        let result = service.document(&self.doc_id).await;
        DocumentOutcome {
            visit: self.visit,
            attempt: self.attempt,
            result,
        }
    }
}

#[derive(Debug)]
pub struct DocumentOutcome {
    pub visit: VisitId,
    pub attempt: u32,
    pub result: Result<DocumentRecord, ServiceError>,
}

#[derive(Debug)]
pub struct DocumentFetchController {
    visit: VisitId,
    doc_id: DocId,
    attempt: u32,
    state: DocumentFetchState,
}

impl DocumentFetchController {
    /// Create the controller for a freshly mounted detail view. It starts out
    /// `Loading`; the returned ticket is the fetch it is waiting for.
    pub fn mount(visit: VisitId, doc_id: DocId) -> (Self, DocumentTicket) {
        let mut controller = Self {
            visit,
            doc_id,
            attempt: 0,
            state: DocumentFetchState::Idle,
        };
        let ticket = controller.begin();
        (controller, ticket)
    }

    pub fn doc_id(&self) -> &DocId {
        &self.doc_id
    }

    pub fn state(&self) -> &DocumentFetchState {
        &self.state
    }

    /// Point the mounted instance at another identifier. Returns the new
    /// fetch, or `None` when the identifier did not change.
    pub fn rebind(&mut self, doc_id: DocId) -> Option<DocumentTicket> {
        if self.doc_id == doc_id {
            return None;
        }
        self.doc_id = doc_id;
        Some(self.begin())
    }

    /// Apply a finished fetch. Outcomes from another visit or from an
    /// attempt that has since been restarted are dropped.
    pub fn resolve(&mut self, outcome: DocumentOutcome) -> bool {
        if outcome.visit != self.visit || outcome.attempt != self.attempt {
            debug!(
                visit = %outcome.visit,
                attempt = outcome.attempt,
                "discarding outdated document outcome"
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(record) => {
                info!(doc_id = %self.doc_id, "document loaded");
                DocumentFetchState::Success(record)
            }
            Err(e) => {
                let message = e.user_message(Endpoint::Document);
                warn!(doc_id = %self.doc_id, "{message}");
                DocumentFetchState::Error(message)
            }
        };
        true
    }

    fn begin(&mut self) -> DocumentTicket {
        self.attempt += 1;
        self.state = DocumentFetchState::Loading;
        debug!(visit = %self.visit, doc_id = %self.doc_id, attempt = self.attempt, "fetching document");

        DocumentTicket {
            visit: self.visit,
            attempt: self.attempt,
            doc_id: self.doc_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> DocumentRecord {
        DocumentRecord {
            doc_id: DocId::from(id),
            title: format!("doc {id}"),
            text: "text".into(),
            metadata: None,
        }
    }

    #[test]
    fn test_mount_starts_loading() {
        let (controller, ticket) = DocumentFetchController::mount(VisitId::new(1), "123".into());

        assert_eq!(controller.state(), &DocumentFetchState::Loading);
        assert_eq!(ticket.doc_id, DocId::from("123"));
        assert_eq!(ticket.visit, VisitId::new(1));
    }

    #[test]
    fn test_success_and_error() {
        let (mut ok, ticket) = DocumentFetchController::mount(VisitId::new(1), "1".into());
        assert!(ok.resolve(DocumentOutcome {
            visit: ticket.visit,
            attempt: ticket.attempt,
            result: Ok(record("1")),
        }));
        assert_eq!(ok.state(), &DocumentFetchState::Success(record("1")));

        let (mut failed, ticket) = DocumentFetchController::mount(VisitId::new(2), "404".into());
        assert!(failed.resolve(DocumentOutcome {
            visit: ticket.visit,
            attempt: ticket.attempt,
            result: Err(ServiceError::from_error_body(404, br#"{"error":"Document not found"}"#)),
        }));
        assert_eq!(
            failed.state(),
            &DocumentFetchState::Error("Failed to fetch document: Document not found.".into())
        );
    }

    #[test]
    fn test_rebind_restarts_and_drops_old_attempt() {
        let (mut controller, first) = DocumentFetchController::mount(VisitId::new(1), "1".into());
        let second = controller.rebind("2".into()).unwrap();
        assert_eq!(controller.state(), &DocumentFetchState::Loading);

        assert!(!controller.resolve(DocumentOutcome {
            visit: first.visit,
            attempt: first.attempt,
            result: Ok(record("1")),
        }));
        assert!(controller.state().is_loading());

        assert!(controller.resolve(DocumentOutcome {
            visit: second.visit,
            attempt: second.attempt,
            result: Ok(record("2")),
        }));
        assert_eq!(controller.state(), &DocumentFetchState::Success(record("2")));
    }

    #[test]
    fn test_rebind_same_id_is_noop() {
        let (mut controller, ticket) = DocumentFetchController::mount(VisitId::new(1), "1".into());
        controller.resolve(DocumentOutcome {
            visit: ticket.visit,
            attempt: ticket.attempt,
            result: Ok(record("1")),
        });

        assert!(controller.rebind("1".into()).is_none());
        assert_eq!(controller.state(), &DocumentFetchState::Success(record("1")));
    }

    #[test]
    fn test_rebind_after_error_refetches() {
        let (mut controller, ticket) = DocumentFetchController::mount(VisitId::new(1), "1".into());
        controller.resolve(DocumentOutcome {
            visit: ticket.visit,
            attempt: ticket.attempt,
            result: Err(ServiceError::transport("connection refused")),
        });

        let ticket = controller.rebind("2".into()).unwrap();
        assert_eq!(ticket.attempt, 2);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_outcome_for_other_visit_is_dropped() {
        let (mut controller, ticket) = DocumentFetchController::mount(VisitId::new(2), "1".into());

        assert!(!controller.resolve(DocumentOutcome {
            visit: VisitId::new(1),
            attempt: ticket.attempt,
            result: Ok(record("1")),
        }));
        assert!(controller.state().is_loading());
    }
}
