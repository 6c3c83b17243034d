use crate::search::ErrorBody;

/// Which endpoint a failure came from; only affects the user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Document,
}

impl Endpoint {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Endpoint::Search => "Search failed",
            Endpoint::Document => "Failed to fetch document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service could not be reached at all
    #[error("could not reach the search service: {0}")]
    Transport(String),

    /// Non-2xx response, or a body that could not be decoded
    #[error("{message}")]
    Http { status: u16, message: String },
}

impl ServiceError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Build the error for a non-2xx response, preferring the service's own
    /// `error` field over the status-derived fallback.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| status_message(status));

        Self::Http { status, message }
    }

    /// A body that failed to decode is reported like an error response
    /// without a message.
    pub fn malformed(status: u16) -> Self {
        Self::Http {
            status,
            message: status_message(status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Http { status, .. } => Some(*status),
        }
    }

    /// Message shown to the user for a failure on `endpoint`.
    pub fn user_message(&self, endpoint: Endpoint) -> String {
        let prefix = endpoint.failure_prefix();
        match self {
            Self::Transport(detail) => {
                format!("{prefix}: {detail}. Is the backend server running?")
            }
            Self::Http { message, .. } => format!("{prefix}: {message}."),
        }
    }
}

pub fn status_message(status: u16) -> String {
    format!("HTTP error! Status: {status}")
}
