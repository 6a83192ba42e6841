//! Wire types for the remote commerce cart API
//!
//! Method + path + body shape is the contract. Field lists mirror what the
//! commerce service actually sends and accepts; payloads the gateway never
//! interprets stay as raw `serde_json::Value` pass-throughs.

use crate::cart::CartStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel delta asking the commerce service to clamp a line to zero.
///
/// Removal is not a separate remote operation. It reuses the delta endpoint
/// with this magnitude and relies on the remote flooring quantity at zero;
/// if the remote ever stops clamping, removal breaks with it.
pub const REMOVE_LINE_DELTA: i64 = -999;

// ============================================================================
// Request bodies
// ============================================================================

/// Body for `POST /api/cart/scan/`.
///
/// `customer_id` is serialized as `null` when absent; the commerce service
/// expects the key to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanBody {
    pub station_id: i64,
    pub shop_id: i64,
    pub user_id: i64,
    pub barcode: String,
    pub customer_id: Option<i64>,
    pub quantity: i64,
}

/// Body for `PATCH /api/cart/items/{lineItemId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustBody {
    pub cart_id: i64,
    pub delta: i64,
}

/// Body for `PATCH /api/cart/suspend`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuspendBody {
    pub cart_id: i64,
    pub user_id: i64,
}

/// Body for `PATCH /api/cart/cancel/{cartId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CancelBody {
    pub user_id: i64,
}

/// Body for `PATCH /api/cart/activate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivateBody {
    pub cart_id: i64,
    pub user_id: i64,
}

/// Body for `POST /api/cart/finalize`.
///
/// Payment entries are opaque to the gateway and pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalizeBody {
    pub cart_id: i64,
    pub discount: f64,
    pub loyalty_points_used: i64,
    pub payments: Vec<Value>,
}

/// Body for `POST /api/customer/find`. The camelCase key is the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FindCustomerBody {
    #[serde(rename = "identifierValue")]
    pub identifier_value: String,
}

// ============================================================================
// Response payloads
// ============================================================================

/// Scan response. A `cart_id` here is authoritative: the remote decides
/// whether the scan joined an existing cart or opened a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScanResponse {
    pub cart_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<ScanLine>,
}

/// One line in a scan response. The commerce service omits fields freely,
/// so everything is lenient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScanLine {
    pub item_id: Option<i64>,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub quantity: i64,
}

/// Envelope of `GET /api/cart/{cartId}/active-items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActiveItemsResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<CartPayload>,
}

/// The `data` object of an active-items read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartPayload {
    pub id: Option<i64>,
    #[serde(default)]
    pub status: CartStatus,
    pub user_id: Option<i64>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<RemoteCartLine>,
}

/// One stored cart line as the read endpoint reports it. No product name:
/// reads return ids only, names are reconciled locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RemoteCartLine {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub quantity: i64,
    pub shop_id: Option<i64>,
    #[serde(default)]
    pub discount: f64,
    pub added_at: Option<String>,
}

/// Acknowledgement shape shared by suspend, cancel, activate and finalize.
///
/// `success` defaults to false: a response that does not say it succeeded
/// is treated as a refusal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
