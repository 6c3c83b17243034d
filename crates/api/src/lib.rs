//! Client side of the Cranfield search service.
//!
//! The service exposes two read-only endpoints: ranked keyword search and
//! single document lookup. [`SearchService`] is the seam the session state
//! talks to; [`HttpSearchService`] is the real implementation.

pub mod search;
mod error;
mod http;

pub use error::{Endpoint, ServiceError};
pub use http::HttpSearchService;
pub use reqwest::Url;

use search::{DocId, DocumentRecord, SearchResultItem};

#[async_trait::async_trait]
pub trait SearchService: Send + Sync {
    /// Ranked hits for `query`, in the order the service ranks them
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultItem>, ServiceError>;

    /// Full document for `doc_id`
    async fn document(&self, doc_id: &DocId) -> Result<DocumentRecord, ServiceError>;
}
