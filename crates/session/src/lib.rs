//! Session and navigation state of the search client.
//!
//! Everything in here is plain state mutated from a single thread. Network
//! work is described by tickets ([`Request`]); whoever owns the runtime runs
//! them against a [`SearchService`] and feeds the [`Response`] back through
//! [`ClientState::apply`].

pub mod document;
pub mod navigation;
pub mod pagination;
pub mod request;
pub mod session;

pub use document::{DocumentFetchController, DocumentFetchState, DocumentOutcome, DocumentTicket};
pub use navigation::{BoundView, NavigationError, Navigator, Route};
pub use request::{SearchOutcome, SearchRequestController, SearchSeq, SearchTicket};
pub use session::{SearchSession, SearchSessionStore, SearchStatus};

use api::{SearchService, ServiceError};
use api::search::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub page_size: usize,
    pub result_limit: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            page_size: config::constants::DEFAULT_PAGE_SIZE,
            result_limit: config::constants::DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Network work requested by the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Search(SearchTicket),
    Document(DocumentTicket),
}

impl Request {
    pub async fn run<S>(self, service: &S) -> Response
    where
        S: SearchService + ?Sized,
    {
        match self {
            Request::Search(ticket) => Response::Search(ticket.run(service).await),
            Request::Document(ticket) => Response::Document(ticket.run(service).await),
        }
    }

    /// Resolve the request with `error` without running it, for requests
    /// that could not be handed to a service at all.
    pub fn fail(self, error: ServiceError) -> Response {
        match self {
            Request::Search(ticket) => Response::Search(SearchOutcome {
                seq: ticket.seq,
                result: Err(error),
            }),
            Request::Document(ticket) => Response::Document(DocumentOutcome {
                visit: ticket.visit,
                attempt: ticket.attempt,
                result: Err(error),
            }),
        }
    }
}

impl From<SearchTicket> for Request {
    fn from(ticket: SearchTicket) -> Self {
        Request::Search(ticket)
    }
}

impl From<DocumentTicket> for Request {
    fn from(ticket: DocumentTicket) -> Self {
        Request::Document(ticket)
    }
}

#[derive(Debug)]
pub enum Response {
    Search(SearchOutcome),
    Document(DocumentOutcome),
}

/// Top-level application state: the one persistent search session plus the
/// navigator that decides which view is mounted.
pub struct ClientState {
    session: SearchSessionStore,
    navigator: Navigator,
}

impl ClientState {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            session: SearchSessionStore::new(settings.page_size, settings.result_limit),
            navigator: Navigator::new(),
        }
    }

    pub fn session(&self) -> &SearchSessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn route(&self) -> Route {
        self.navigator.route()
    }

    pub fn submit_search(&mut self, query: &str) -> Option<Request> {
        self.session.start_search(query).map(Request::from)
    }

    pub fn set_page(&mut self, n: usize) -> bool {
        self.session.set_page(n)
    }

    pub fn navigate(&mut self, path: &str) -> Result<Option<Request>, NavigationError> {
        Ok(self.navigator.navigate(path)?.map(Request::from))
    }

    pub fn open_document(&mut self, doc_id: &DocId) -> Option<Request> {
        self.navigator.go(Route::document(doc_id)).map(Request::from)
    }

    /// Leave the detail view for the search view.
    pub fn back_to_results(&mut self) -> Option<Request> {
        self.navigator.return_to(Route::Search).map(Request::from)
    }

    pub fn back(&mut self) -> Option<Request> {
        self.navigator.back().map(Request::from)
    }

    /// Apply a finished request. Returns `false` if it was outdated.
    pub fn apply(&mut self, response: Response) -> bool {
        match response {
            Response::Search(outcome) => self.session.resolve(outcome),
            Response::Document(outcome) => self.navigator.resolve_document(outcome),
        }
    }

    pub fn view(&mut self) -> BoundView<'_> {
        self.navigator.bind(&mut self.session)
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
