//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

use quiz_core::{NormalizeError, SessionError};

/// Errors emitted while fetching a question batch from a provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question request timed out after {0:?}")]
    Timeout(Duration),
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question payload could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Whether another attempt could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Timeout(_) => true,
            ProviderError::HttpStatus(status) => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            ProviderError::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            ProviderError::Decode(_) => false,
        }
    }
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("could not load questions: {0}")]
    Fetch(#[from] ProviderError),
    #[error(transparent)]
    Malformed(#[from] NormalizeError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
