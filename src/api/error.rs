//! Failure taxonomy for article requests.

use thiserror::Error;

/// Errors that can occur while fetching from the article backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with a non-success status.
    #[error("Request to '{url}' failed with status {status}")]
    RequestFailed { url: String, status: u16 },

    /// The request never produced a response (unreachable host, timeout).
    #[error("Transport error for '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body does not match the expected shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Copyable tag of a [`FetchError`], carried through UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    RequestFailed,
    Transport,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::RequestFailed { .. } => FetchErrorKind::RequestFailed,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::RequestFailed { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

impl FetchErrorKind {
    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::RequestFailed => "request_failed",
            FetchErrorKind::Transport => "transport_error",
            FetchErrorKind::Decode => "decode_error",
        }
    }
}
