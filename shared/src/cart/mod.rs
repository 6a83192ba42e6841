//! Cart read models and display views
//!
//! Carts are owned by the remote commerce service. These types are
//! immutable snapshots decoded per read plus the derived display shapes
//! the gateway hands to the till UI; nothing here is cached beyond one
//! reconciliation pass.

mod types;

pub use types::{
    CartLineView, CartStatus, CartTotals, CartView, DisplayData, ScanOutcome, ScannedLineView,
};
