use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Opaque document identifier. It is forwarded verbatim both as a route
/// parameter and as the document endpoint's path segment.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, From, Display,
)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single ranked hit, exactly as returned by `GET /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub doc_id: DocId,
    pub score: f64,
    pub title: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub bib: String,
}

impl DocumentMetadata {
    pub fn is_empty(&self) -> bool {
        self.author.trim().is_empty() && self.bib.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub doc_id: DocId,
    pub title: String,
    pub text: String,
    pub metadata: Option<DocumentMetadata>,
}

/// Body of a successful `GET /doc/{id}`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentBody {
    title: String,
    text: String,
    #[serde(default)]
    metadata: Option<DocumentMetadata>,
}

impl DocumentBody {
    pub(crate) fn into_record(self, doc_id: DocId) -> DocumentRecord {
        DocumentRecord {
            doc_id,
            title: self.title,
            text: self.text,
            metadata: self.metadata.filter(|m| !m.is_empty()),
        }
    }
}

/// Body of any non-2xx response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
