//! Errors raised while talking to the backend or the object store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// The body could not be decoded into the expected record.
    #[error("invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("upload failed: {0}")]
    Storage(String),
}

impl ApiError {
    /// Whether the failure means the backend could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }
}
