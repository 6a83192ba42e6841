//! Core module - gateway configuration, state, server and errors
//!
//! # Structure
//!
//! - [`Config`] - gateway configuration
//! - [`GatewayState`] - shared handler state
//! - [`Server`] - HTTP server
//! - [`GatewayError`] - gateway-level error type

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{GatewayError, GatewayResult};
pub use server::Server;
pub use state::GatewayState;
