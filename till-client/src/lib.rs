//! Till Client - HTTP client for the remote commerce cart API
//!
//! Provides the generic authenticated request executor plus the typed
//! [`CommerceApi`] surface the cart orchestrator talks to.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::CommerceApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared wire types for convenience
pub use shared::commerce::{AckResponse, ActiveItemsResponse, ScanResponse};
