use std::result;

use thiserror::Error;

/// Error types for paper fetcher operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body was not well-formed JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Non-success HTTP status, or an error reported inside a 200 response
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Search limit exceeded
    /// This error is returned when a search requests more results than ESearch will return.
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },
}

pub type Result<T> = result::Result<T, FetchError>;

impl FetchError {
    /// Whether this error originated from the upstream E-utilities API
    ///
    /// Upstream errors cover transport failures, non-success statuses and
    /// malformed response bodies. They are never recovered from internally.
    pub fn is_upstream(&self) -> bool {
        match self {
            FetchError::RequestError(_) | FetchError::JsonError(_) | FetchError::ApiError { .. } => {
                true
            }
            FetchError::SearchLimitExceeded { .. } => false,
        }
    }
}
