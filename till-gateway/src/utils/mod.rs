//! Utility modules
//!
//! # Contents
//!
//! - [`logger`] - tracing setup with optional daily-rolling file output

pub mod logger;

pub use logger::{init_logger, init_logger_with_file};
