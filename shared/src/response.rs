//! Failure envelope for the gateway surface
//!
//! Every gateway error renders with the same body shape so the till UI has
//! one code path for failures.

use serde::{Deserialize, Serialize};

/// `{"success": false, "error": true, "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: true,
            message: message.into(),
        }
    }
}
