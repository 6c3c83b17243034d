use crate::search::{DocId, DocumentBody, DocumentRecord, SearchResultItem};
use crate::{SearchService, ServiceError};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("cranfield-search/", env!("CARGO_PKG_VERSION"));

/// [`SearchService`] backed by the service's HTTP API.
///
/// No timeout or retry is configured beyond the transport defaults.
#[derive(Clone, Debug)]
pub struct HttpSearchService {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpSearchService {
    pub fn new(base_url: Url) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `segments` appended to the base URL, each percent-encoded as a single
    /// path segment.
    fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, ServiceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ServiceError::transport(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ServiceError> {
        let resp = request.send().await.map_err(|e| {
            warn!("search service unreachable: {e}");
            ServiceError::transport(e)
        })?;

        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!("failed to read response body ({status}): {e}");
                return Err(ServiceError::malformed(status.as_u16()));
            }
        };

        if !status.is_success() {
            return Err(ServiceError::from_error_body(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("malformed response body ({status}): {e}");
            ServiceError::malformed(status.as_u16())
        })
    }
}

#[async_trait::async_trait]
impl SearchService for HttpSearchService {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultItem>, ServiceError> {
        let url = self.endpoint(["search"])?;
        let limit = limit.to_string();
        debug!(%url, query, "GET search");

        let request = self
            .http
            .get(url)
            .query(&[("q", query), ("k", limit.as_str())]);
        self.get_json(request).await
    }

    async fn document(&self, doc_id: &DocId) -> Result<DocumentRecord, ServiceError> {
        let url = self.endpoint(["doc", doc_id.as_str()])?;
        debug!(%url, "GET document");

        let body: DocumentBody = self.get_json(self.http.get(url)).await?;
        Ok(body.into_record(doc_id.clone()))
    }
}
