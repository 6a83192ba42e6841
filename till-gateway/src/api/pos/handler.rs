//! POS API handlers
//!
//! Handlers own the session round-trip: lock the handle the middleware
//! injected, run the orchestrator operation, persist the session after
//! operations that may have changed it, and shape the reply. Validation
//! of operation inputs lives in the orchestrator, not here.

use axum::{
    Json,
    extract::{Extension, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cart::{CartError, FinalizePayload};
use crate::core::{GatewayResult, GatewayState};
use crate::session::SessionHandle;
use shared::DisplayData;
use shared::ScanOutcome;
use shared::commerce::AckResponse;

#[derive(Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub barcode: String,
    pub customer_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// Reply for a successful scan: the outcome plus the success flag.
#[derive(Serialize)]
pub struct ScanReply {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: ScanOutcome,
}

/// POST /api/pos/scan - scan a barcode into the operator's cart
pub async fn scan(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<ScanRequest>,
) -> GatewayResult<Json<ScanReply>> {
    let mut session = session.lock().await;
    let outcome = state
        .orchestrator()
        .scan(
            &mut session,
            &payload.barcode,
            payload.customer_id,
            payload.quantity.unwrap_or(1),
        )
        .await?;
    state.sessions().save(&session)?;

    Ok(Json(ScanReply {
        success: true,
        outcome,
    }))
}

/// Read reply: `{success, has_cart, cart?, totals}`.
#[derive(Serialize)]
pub struct CartReply {
    pub success: bool,
    #[serde(flatten)]
    pub display: DisplayData,
}

/// GET /api/pos/cart - current cart display payload
pub async fn cart(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
) -> GatewayResult<Json<CartReply>> {
    let session = session.lock().await;
    let display = state.orchestrator().display_data(&session).await?;

    Ok(Json(CartReply {
        success: true,
        display,
    }))
}

#[derive(Deserialize)]
pub struct ItemRequest {
    pub item_id: Option<i64>,
}

impl ItemRequest {
    fn require_item_id(&self) -> Result<i64, CartError> {
        self.item_id
            .ok_or_else(|| CartError::Validation("Item ID is required".to_string()))
    }
}

/// PATCH /api/pos/cart/item/increase - line quantity +1
pub async fn increase_item(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<ItemRequest>,
) -> GatewayResult<Json<Value>> {
    let session = session.lock().await;
    let reply = state
        .orchestrator()
        .increase_line(&session, payload.require_item_id()?)
        .await?;
    Ok(Json(reply))
}

/// PATCH /api/pos/cart/item/decrease - line quantity -1
pub async fn decrease_item(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<ItemRequest>,
) -> GatewayResult<Json<Value>> {
    let session = session.lock().await;
    let reply = state
        .orchestrator()
        .decrease_line(&session, payload.require_item_id()?)
        .await?;
    Ok(Json(reply))
}

/// DELETE /api/pos/cart/item/remove - drive a line's quantity to zero
pub async fn remove_item(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<ItemRequest>,
) -> GatewayResult<Json<Value>> {
    let session = session.lock().await;
    let reply = state
        .orchestrator()
        .remove_line(&session, payload.require_item_id()?)
        .await?;
    Ok(Json(reply))
}

/// POST /api/pos/cart/suspend - park the current cart
pub async fn suspend(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
) -> GatewayResult<Json<AckResponse>> {
    let mut session = session.lock().await;
    let ack = state.orchestrator().suspend(&mut session).await?;
    state.sessions().save(&session)?;
    Ok(Json(ack))
}

/// POST /api/pos/cart/cancel - cancel the current cart
pub async fn cancel(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
) -> GatewayResult<Json<AckResponse>> {
    let mut session = session.lock().await;
    let ack = state.orchestrator().cancel(&mut session).await?;
    state.sessions().save(&session)?;
    Ok(Json(ack))
}

#[derive(Deserialize)]
pub struct ActivateRequest {
    pub cart_id: Option<i64>,
}

/// POST /api/pos/cart/activate - reactivate a suspended cart
pub async fn activate(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<ActivateRequest>,
) -> GatewayResult<Json<AckResponse>> {
    let mut session = session.lock().await;
    let ack = state
        .orchestrator()
        .activate(&mut session, payload.cart_id.unwrap_or(0))
        .await?;
    state.sessions().save(&session)?;
    Ok(Json(ack))
}

#[derive(Deserialize)]
pub struct FinalizeRequest {
    pub discount: Option<f64>,
    pub loyalty_points_used: Option<i64>,
    pub payments: Option<Vec<Value>>,
}

/// POST /api/pos/cart/finalize - finalize the current cart with payments
pub async fn finalize(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<FinalizeRequest>,
) -> GatewayResult<Json<AckResponse>> {
    let mut session = session.lock().await;
    let ack = state
        .orchestrator()
        .finalize(
            &mut session,
            FinalizePayload {
                discount: payload.discount,
                loyalty_points_used: payload.loyalty_points_used,
                payments: payload.payments,
            },
        )
        .await?;
    state.sessions().save(&session)?;
    Ok(Json(ack))
}

#[derive(Deserialize)]
pub struct FindCustomerRequest {
    #[serde(rename = "identifierValue", default)]
    pub identifier_value: String,
}

/// POST /api/pos/customer/find - customer lookup pass-through
pub async fn find_customer(
    State(state): State<GatewayState>,
    Extension(session): Extension<SessionHandle>,
    Json(payload): Json<FindCustomerRequest>,
) -> GatewayResult<Json<Value>> {
    let session = session.lock().await;
    let reply = state
        .orchestrator()
        .find_customer(&session, &payload.identifier_value)
        .await?;
    Ok(Json(reply))
}
