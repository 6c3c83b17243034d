//! Route table and view binding.
//!
//! Two routes exist: `/` shows the search view bound to the application's
//! [`SearchSessionStore`], and `/doc/{doc_id}` shows a detail view bound to
//! its own [`DocumentFetchController`].

use crate::document::{DocumentFetchController, DocumentOutcome, DocumentTicket, VisitId};
use crate::session::SearchSessionStore;
use api::search::DocId;
use std::fmt;
use tracing::{debug, info};

const DOCUMENT_PREFIX: &str = "/doc/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches `{0}`")]
    UnknownRoute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Document(DocId),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, NavigationError> {
        if path == "/" {
            return Ok(Route::Search);
        }

        // At most one trailing slash is ignored
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match trimmed.strip_prefix(DOCUMENT_PREFIX) {
            Some(doc_id) if !doc_id.is_empty() && !doc_id.contains('/') => {
                Ok(Route::Document(DocId::new(doc_id)))
            }
            _ => Err(NavigationError::UnknownRoute(path.to_string())),
        }
    }

    pub fn document(doc_id: &DocId) -> Self {
        Route::Document(doc_id.clone())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Search => write!(f, "/"),
            Route::Document(doc_id) => write!(f, "{DOCUMENT_PREFIX}{doc_id}"),
        }
    }
}

/// The mounted view. The search view holds no state of its own; the detail
/// view owns its controller and drops it on unmount.
#[derive(Debug)]
enum ActiveView {
    Search,
    Document(DocumentFetchController),
}

/// A view together with the state it renders from.
pub enum BoundView<'a> {
    Search(&'a mut SearchSessionStore),
    Document(&'a mut DocumentFetchController),
}

#[derive(Debug)]
pub struct Navigator {
    view: ActiveView,
    history: Vec<Route>,
    visits: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            view: ActiveView::Search,
            history: Vec::new(),
            visits: 0,
        }
    }

    pub fn route(&self) -> Route {
        match &self.view {
            ActiveView::Search => Route::Search,
            ActiveView::Document(controller) => Route::document(controller.doc_id()),
        }
    }

    pub fn document(&self) -> Option<&DocumentFetchController> {
        match &self.view {
            ActiveView::Document(controller) => Some(controller),
            ActiveView::Search => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn navigate(&mut self, path: &str) -> Result<Option<DocumentTicket>, NavigationError> {
        let route = Route::parse(path)?;
        Ok(self.go(route))
    }

    /// Move to `route`, remembering the current one for [`Navigator::back`].
    /// Going to the route already shown does nothing.
    pub fn go(&mut self, route: Route) -> Option<DocumentTicket> {
        let current = self.route();
        if current == route {
            return None;
        }
        self.history.push(current);
        self.transition(route)
    }

    /// Like [`Navigator::go`], but when `route` is the previous history entry
    /// that entry is popped instead of pushing a new one.
    pub fn return_to(&mut self, route: Route) -> Option<DocumentTicket> {
        if self.route() == route {
            return None;
        }
        if self.history.last() == Some(&route) {
            return self.back();
        }
        self.go(route)
    }

    pub fn back(&mut self) -> Option<DocumentTicket> {
        match self.history.pop() {
            Some(route) => self.transition(route),
            None => {
                debug!("history is empty, staying on {}", self.route());
                None
            }
        }
    }

    /// Hand a finished document fetch to the mounted detail view. Outcomes
    /// for views that are gone are dropped.
    pub fn resolve_document(&mut self, outcome: DocumentOutcome) -> bool {
        match &mut self.view {
            ActiveView::Document(controller) => controller.resolve(outcome),
            ActiveView::Search => {
                debug!(visit = %outcome.visit, "detail view unmounted, dropping document outcome");
                false
            }
        }
    }

    /// Bind the mounted view to its state: the search view gets the
    /// application's `session`, the detail view its own controller.
    pub fn bind<'a>(&'a mut self, session: &'a mut SearchSessionStore) -> BoundView<'a> {
        match &mut self.view {
            ActiveView::Search => BoundView::Search(session),
            ActiveView::Document(controller) => BoundView::Document(controller),
        }
    }

    fn transition(&mut self, route: Route) -> Option<DocumentTicket> {
        info!("navigating {} -> {}", self.route(), route);

        match route {
            Route::Search => {
                self.view = ActiveView::Search;
                None
            }
            Route::Document(doc_id) => {
                if let ActiveView::Document(controller) = &mut self.view {
                    return controller.rebind(doc_id);
                }

                self.visits += 1;
                let (controller, ticket) =
                    DocumentFetchController::mount(VisitId::new(self.visits), doc_id);
                self.view = ActiveView::Document(controller);
                Some(ticket)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFetchState;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Search)]
    #[case("/doc/123", Route::Document(DocId::from("123")))]
    #[case("/doc/123/", Route::Document(DocId::from("123")))]
    #[case("/doc/a-b_c", Route::Document(DocId::from("a-b_c")))]
    fn test_parse_route(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("/doc")]
    #[case("/doc/")]
    #[case("/doc/1/2")]
    #[case("/search")]
    #[case("//")]
    #[case("/doc/1//")]
    fn test_parse_unknown_route(#[case] path: &str) {
        assert_eq!(
            Route::parse(path),
            Err(NavigationError::UnknownRoute(path.to_string()))
        );
    }

    #[test]
    fn test_route_display_round_trip() {
        for route in [Route::Search, Route::Document(DocId::from("42"))] {
            assert_eq!(Route::parse(&route.to_string()), Ok(route));
        }
    }

    #[test]
    fn test_detail_route_mounts_fresh_controller() {
        let mut navigator = Navigator::new();

        let first = navigator.navigate("/doc/123").unwrap().unwrap();
        assert_eq!(navigator.route(), Route::Document(DocId::from("123")));
        navigator.back();
        assert!(navigator.document().is_none());

        let second = navigator.navigate("/doc/123").unwrap().unwrap();
        assert_ne!(first.visit, second.visit);
        assert_eq!(
            navigator.document().unwrap().state(),
            &DocumentFetchState::Loading
        );
    }

    #[test]
    fn test_detail_to_detail_rebinds_mounted_controller() {
        let mut navigator = Navigator::new();
        let first = navigator.navigate("/doc/1").unwrap().unwrap();
        let second = navigator.navigate("/doc/2").unwrap().unwrap();

        assert_eq!(first.visit, second.visit);
        assert_eq!(second.attempt, first.attempt + 1);

        // Back to /doc/1 restarts the same instance again
        let third = navigator.back().unwrap();
        assert_eq!(third.doc_id, DocId::from("1"));
        assert_eq!(third.visit, first.visit);
    }

    #[test]
    fn test_same_route_is_noop() {
        let mut navigator = Navigator::new();
        navigator.navigate("/doc/1").unwrap();

        assert_eq!(navigator.navigate("/doc/1/"), Ok(None));
        assert_eq!(navigator.route(), Route::Document(DocId::from("1")));

        // The no-op did not add a history entry
        assert!(navigator.back().is_none());
        assert_eq!(navigator.route(), Route::Search);
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn test_unknown_route_keeps_view() {
        let mut navigator = Navigator::new();
        navigator.navigate("/doc/1").unwrap();

        assert!(navigator.navigate("/nowhere").is_err());
        assert_eq!(navigator.route(), Route::Document(DocId::from("1")));
    }

    #[test]
    fn test_return_to_pops_matching_history() {
        let mut navigator = Navigator::new();

        for _ in 0..1000 {
            navigator.navigate("/doc/1").unwrap();
            assert!(navigator.return_to(Route::Search).is_none());
        }

        assert_eq!(navigator.route(), Route::Search);
        assert!(navigator.history.is_empty());
    }

    #[test]
    fn test_return_to_pushes_when_not_previous() {
        let mut navigator = Navigator::new();
        navigator.navigate("/doc/1").unwrap();
        navigator.navigate("/doc/2").unwrap();

        assert!(navigator.return_to(Route::Search).is_none());
        assert_eq!(navigator.route(), Route::Search);
        assert_eq!(navigator.history.len(), 3);

        // Already there
        assert!(navigator.return_to(Route::Search).is_none());
        assert_eq!(navigator.history.len(), 3);
    }

    #[test]
    fn test_back_on_empty_history() {
        let mut navigator = Navigator::new();
        assert!(!navigator.can_go_back());
        assert!(navigator.back().is_none());
        assert_eq!(navigator.route(), Route::Search);
    }

    #[test]
    fn test_outcome_after_unmount_is_dropped() {
        let mut navigator = Navigator::new();
        let ticket = navigator.navigate("/doc/1").unwrap().unwrap();
        navigator.navigate("/").unwrap();

        assert!(!navigator.resolve_document(DocumentOutcome {
            visit: ticket.visit,
            attempt: ticket.attempt,
            result: Err(api::ServiceError::transport("late")),
        }));
    }

    #[test]
    fn test_bind_injects_session_into_search_view() {
        let mut navigator = Navigator::new();
        let mut session = SearchSessionStore::new(10, 100);

        assert!(matches!(navigator.bind(&mut session), BoundView::Search(_)));

        navigator.navigate("/doc/7").unwrap();
        match navigator.bind(&mut session) {
            BoundView::Document(controller) => {
                assert_eq!(controller.doc_id(), &DocId::from("7"))
            }
            BoundView::Search(_) => panic!("expected the detail view"),
        }
    }
}
