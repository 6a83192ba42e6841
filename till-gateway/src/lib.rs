//! Tillgate Gateway - POS front end for a remote commerce cart API
//!
//! # Architecture overview
//!
//! The gateway owns no catalog and no cart storage. Carts live in the
//! remote commerce service; this process tracks one current cart per
//! operator session, translates till intents into commerce calls and
//! reconciles the partial data the remote returns:
//!
//! - **Sessions** (`session`): cookie-bound operator sessions with the
//!   current-cart reference and the product-name cache
//! - **Cart orchestration** (`cart`): scan/adjust/suspend/cancel/activate/
//!   finalize lifecycle plus locally derived totals
//! - **HTTP API** (`api`): the till-facing surface and health probes
//!
//! # Module structure
//!
//! ```text
//! till-gateway/src/
//! ├── core/          # configuration, state, server, errors
//! ├── session/       # operator sessions, name cache, cookie middleware
//! ├── cart/          # lifecycle orchestration, totals, error taxonomy
//! ├── api/           # HTTP routes and handlers
//! ├── routes.rs      # router assembly and middleware stack
//! └── utils/         # logging
//! ```

pub mod api;
pub mod cart;
pub mod core;
pub mod routes;
pub mod session;
pub mod utils;

// Re-export public types
pub use cart::{CartError, CartOrchestrator, CartResult, FinalizePayload};
pub use core::{Config, GatewayError, GatewayResult, GatewayState, Server};
pub use session::{OperatorSession, ProductNameCache, SessionStore};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  _______ ____
 /_  __(_) / /
  / / / / / /
 / / / / / /
/_/ /_/_/_/
   ______      __
  / ____/___ _/ /____
 / / __/ __ `/ __/ _ \
/ /_/ / /_/ / /_/  __/
\____/\__,_/\__/\___/
    "#
    );
}
