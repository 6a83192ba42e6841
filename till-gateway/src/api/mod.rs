//! HTTP API surface
//!
//! # Structure
//!
//! - [`pos`] - till-facing cart routes under `/api/pos`
//! - [`health`] - liveness and upstream probes under `/api/health`

pub mod health;
pub mod pos;
