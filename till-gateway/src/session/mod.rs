//! Operator sessions
//!
//! # Structure
//!
//! - [`OperatorSession`] - per-operator context passed into every
//!   orchestrator call
//! - [`ProductNameCache`] - scan-time name cache consulted on cart reads
//! - [`SessionStore`] - concurrent session map with optional file
//!   persistence
//! - [`resolve_session`] - cookie middleware wiring sessions to requests

pub mod middleware;
mod operator;
mod store;

pub use middleware::{SESSION_COOKIE, resolve_session};
pub use operator::{CachedName, OperatorSession, ProductNameCache};
pub use store::{SessionHandle, SessionStore, SessionStoreError};
