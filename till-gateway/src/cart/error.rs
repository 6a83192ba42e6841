//! Cart operation failure taxonomy
//!
//! Caller errors (`Validation`, `NoActiveCart`) are detected before any
//! remote call and map to 400. Remote failures are re-shaped from the
//! client error at the call site and map to 500, keeping the 4xx/5xx
//! caller-correctable/transient distinction for logging.

use axum::http::StatusCode;
use thiserror::Error;

use till_client::ClientError;

#[derive(Debug, Error)]
pub enum CartError {
    /// Required input missing or malformed. No remote call was made.
    #[error("{0}")]
    Validation(String),

    /// The operation needs a cart reference and the session has none.
    #[error("No active cart")]
    NoActiveCart,

    /// The commerce service answered with an error status.
    #[error("Commerce API rejected the request ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    /// Transport failure, timeout or an undecodable response.
    #[error("Commerce API unavailable: {0}")]
    RemoteUnavailable(String),
}

impl CartError {
    /// Errors the caller can correct by changing their request.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CartError::Validation(_) | CartError::NoActiveCart)
    }

    /// Failures worth retrying later: transport problems and remote 5xx.
    /// A remote 4xx means the request itself is wrong and retrying the
    /// same call will not help.
    pub fn is_transient(&self) -> bool {
        match self {
            CartError::RemoteUnavailable(_) => true,
            CartError::RemoteRejected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Gateway status for this failure: 400 for caller errors, 500 for
    /// everything remote or unexpected.
    pub fn http_status(&self) -> StatusCode {
        if self.is_caller_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<ClientError> for CartError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { status, message } => {
                CartError::RemoteRejected { status, message }
            }
            ClientError::Http(e) => CartError::RemoteUnavailable(e.to_string()),
            ClientError::InvalidResponse(detail) => CartError::RemoteUnavailable(detail),
        }
    }
}

/// Result type for cart operations
pub type CartResult<T> = std::result::Result<T, CartError>;
