//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The commerce service answered with an error status
    #[error("API rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A success response that could not be decoded into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Whether this failure came back with a caller-correctable 4xx status.
    /// Transport failures and 5xx responses count as transient.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ClientError::Rejected { status, .. } if (400..500).contains(status))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
