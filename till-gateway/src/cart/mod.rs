//! Cart orchestration - lifecycle semantics for the operator's cart
//!
//! # Structure
//!
//! - [`CartOrchestrator`] - the lifecycle operations against the commerce API
//! - [`CartError`] - the operation failure taxonomy
//! - [`totals`] - derived financial totals

pub mod error;
pub mod orchestrator;
pub mod totals;

pub use error::{CartError, CartResult};
pub use orchestrator::{CartOrchestrator, FinalizePayload};
