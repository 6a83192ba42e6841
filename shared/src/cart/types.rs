//! Cart snapshot and display types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cart lifecycle status as reported by the commerce service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    Active,
    Suspended,
    Cancelled,
    Finalized,
    /// Any status the remote reports that this gateway does not model.
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CartStatus::Active => "active",
            CartStatus::Suspended => "suspended",
            CartStatus::Cancelled => "cancelled",
            CartStatus::Finalized => "finalized",
            CartStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// One cart line as displayed to the till UI.
///
/// `item_total` is recomputed locally from `unit_price * quantity`; a total
/// reported by the remote is never trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineView {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<i64>,
    #[serde(default)]
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    pub item_total: f64,
}

/// Cart snapshot assembled from one active-items read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartView {
    pub id: Option<i64>,
    pub status: CartStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub items: Vec<CartLineView>,
}

impl CartView {
    /// Snapshot for a referenced cart the remote returned no payload for.
    pub fn missing() -> Self {
        Self {
            id: None,
            status: CartStatus::Unknown,
            user_id: None,
            created_at: None,
            items: Vec::new(),
        }
    }
}

/// Derived financial totals. Never persisted, always recomputed per read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: i64,
}

impl CartTotals {
    /// All-zero totals, used for empty and absent carts.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One scanned line echoed back to the till with its computed total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScannedLineView {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub item_total: f64,
}

/// Result of a scan operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanOutcome {
    pub cart_id: Option<i64>,
    pub items: Vec<ScannedLineView>,
}

/// Read-side payload for the till display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayData {
    pub has_cart: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartView>,
    pub totals: CartTotals,
}

impl DisplayData {
    /// Payload for a session without a cart reference.
    pub fn empty() -> Self {
        Self {
            has_cart: false,
            cart: None,
            totals: CartTotals::zero(),
        }
    }
}
