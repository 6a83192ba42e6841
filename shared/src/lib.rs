//! Shared types for the Tillgate POS gateway
//!
//! Data contracts used across crates: cart read models and display views,
//! wire types for the remote commerce cart API, and the failure envelope
//! returned by the gateway surface.

pub mod cart;
pub mod commerce;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{
    CartLineView, CartStatus, CartTotals, CartView, DisplayData, ScanOutcome, ScannedLineView,
};
pub use commerce::REMOVE_LINE_DELTA;
pub use response::ErrorResponse;
