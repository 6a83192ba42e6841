use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cart::CartError;
use crate::session::SessionStoreError;
use shared::ErrorResponse;

/// Everything a handler can fail with.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("session storage error: {0}")]
    Session(#[from] SessionStoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::Cart(err) => {
                if err.is_caller_error() {
                    tracing::warn!(error = %err, "Cart operation refused");
                } else {
                    tracing::error!(error = %err, "Cart operation failed");
                }
                (err.http_status(), err.to_string())
            }
            GatewayError::Session(err) => {
                tracing::error!(error = %err, "Session storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Session storage failure".to_string(),
                )
            }
            GatewayError::Io(err) => {
                tracing::error!(error = %err, "I/O failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            GatewayError::Internal(err) => {
                tracing::error!(error = ?err, "Internal gateway error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for handlers
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
