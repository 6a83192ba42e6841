//! Cart lifecycle orchestration
//!
//! Translates operator intents into commerce API calls and keeps the
//! session's cart reference and name cache in step with the outcomes. The
//! orchestrator owns no cart state of its own: everything it knows about
//! an operator arrives in the [`OperatorSession`] passed into each call,
//! and the handler layer persists whatever changed.
//!
//! Validation runs before any remote call; a request that fails it never
//! leaves the gateway.

use std::sync::Arc;

use serde_json::Value;

use crate::cart::error::{CartError, CartResult};
use crate::cart::totals;
use crate::session::OperatorSession;
use shared::commerce::{
    AckResponse, ActivateBody, AdjustBody, CancelBody, FinalizeBody, FindCustomerBody,
    REMOVE_LINE_DELTA, ScanBody, SuspendBody,
};
use shared::{CartLineView, CartView, DisplayData, ScanOutcome, ScannedLineView};
use till_client::CommerceApi;

/// Checkout details as the till submits them.
///
/// Absent fields take the same defaults the commerce service would apply;
/// the cart id always comes from the session reference and cannot be
/// supplied here.
#[derive(Debug, Clone, Default)]
pub struct FinalizePayload {
    pub discount: Option<f64>,
    pub loyalty_points_used: Option<i64>,
    pub payments: Option<Vec<Value>>,
}

impl FinalizePayload {
    fn into_body(self, cart_id: i64) -> FinalizeBody {
        FinalizeBody {
            cart_id,
            discount: self.discount.unwrap_or(0.0),
            loyalty_points_used: self.loyalty_points_used.unwrap_or(0),
            payments: self.payments.unwrap_or_default(),
        }
    }
}

/// Cart lifecycle operations for one gateway instance.
///
/// Cheap to clone; shared across requests through [`GatewayState`].
///
/// [`GatewayState`]: crate::core::GatewayState
#[derive(Clone)]
pub struct CartOrchestrator {
    commerce: Arc<dyn CommerceApi>,
}

impl CartOrchestrator {
    pub fn new(commerce: Arc<dyn CommerceApi>) -> Self {
        Self { commerce }
    }

    /// Scan a barcode into the operator's cart.
    ///
    /// The remote decides whether the scan opens a new cart or lands in an
    /// existing one: a `cart_id` in its response overwrites the session
    /// reference, a response without one leaves the reference untouched.
    /// Scanned product names are cached for read-side reconciliation, and
    /// each echoed line carries a locally computed `item_total`.
    pub async fn scan(
        &self,
        session: &mut OperatorSession,
        barcode: &str,
        customer_id: Option<i64>,
        quantity: i64,
    ) -> CartResult<ScanOutcome> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(CartError::Validation("Barcode is required".to_string()));
        }
        if quantity < 1 {
            return Err(CartError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let body = ScanBody {
            station_id: session.station_id,
            shop_id: session.shop_id,
            user_id: session.user_id,
            barcode: barcode.to_string(),
            customer_id,
            quantity,
        };

        let response = self.commerce.scan(session.token(), &body).await?;

        if let Some(cart_id) = response.cart_id {
            session.set_current_cart(cart_id);
        }
        session.names_mut().remember_scanned(&response.items);

        let items = response
            .items
            .iter()
            .map(|line| ScannedLineView {
                id: line.item_id,
                product_id: line.product_id,
                product_name: line
                    .product_name
                    .clone()
                    .unwrap_or_else(|| "Unknown product".to_string()),
                unit_price: line.unit_price,
                quantity: line.quantity,
                item_total: totals::line_total(line.unit_price, line.quantity),
            })
            .collect();

        tracing::info!(barcode, cart = ?session.current_cart_id(), "Barcode scanned");

        Ok(ScanOutcome {
            cart_id: session.current_cart_id(),
            items,
        })
    }

    /// Apply a signed quantity delta to one line of the current cart.
    ///
    /// The gateway never computes the resulting quantity; it signals
    /// direction and magnitude and lets the next read report the post
    /// state. The remote's reply passes through to the till untouched.
    pub async fn adjust_quantity(
        &self,
        session: &OperatorSession,
        line_item_id: i64,
        delta: i64,
    ) -> CartResult<Value> {
        let cart_id = session.current_cart_id().ok_or(CartError::NoActiveCart)?;

        let body = AdjustBody { cart_id, delta };
        let reply = self
            .commerce
            .adjust_line(session.token(), line_item_id, &body)
            .await?;

        tracing::info!(cart = cart_id, line_item_id, delta, "Line quantity adjusted");
        Ok(reply)
    }

    /// Increment one line by a single unit.
    pub async fn increase_line(
        &self,
        session: &OperatorSession,
        line_item_id: i64,
    ) -> CartResult<Value> {
        self.adjust_quantity(session, line_item_id, 1).await
    }

    /// Decrement one line by a single unit. The remote floors at zero.
    pub async fn decrease_line(
        &self,
        session: &OperatorSession,
        line_item_id: i64,
    ) -> CartResult<Value> {
        self.adjust_quantity(session, line_item_id, -1).await
    }

    /// Remove a line by driving its quantity to zero with the sentinel
    /// delta. Removal is not a separate remote operation.
    pub async fn remove_line(
        &self,
        session: &OperatorSession,
        line_item_id: i64,
    ) -> CartResult<Value> {
        self.adjust_quantity(session, line_item_id, REMOVE_LINE_DELTA)
            .await
    }

    /// Park the current cart for later reactivation.
    ///
    /// On a successful ack the cart reference is dropped but the name
    /// cache stays: the cart may come back into this session, and its
    /// read-side lines still carry ids only.
    pub async fn suspend(&self, session: &mut OperatorSession) -> CartResult<AckResponse> {
        let cart_id = session.current_cart_id().ok_or(CartError::NoActiveCart)?;

        let body = SuspendBody {
            cart_id,
            user_id: session.user_id,
        };
        let ack = self.commerce.suspend(session.token(), &body).await?;

        if ack.success {
            session.clear_current_cart();
            tracing::info!(cart = cart_id, "Cart suspended");
        } else {
            tracing::warn!(cart = cart_id, "Commerce service declined to suspend cart");
        }

        Ok(ack)
    }

    /// Cancel the current cart. Terminal: on a successful ack both the
    /// cart reference and the name cache are dropped.
    pub async fn cancel(&self, session: &mut OperatorSession) -> CartResult<AckResponse> {
        let cart_id = session.current_cart_id().ok_or(CartError::NoActiveCart)?;

        let body = CancelBody {
            user_id: session.user_id,
        };
        let ack = self.commerce.cancel(session.token(), cart_id, &body).await?;

        if ack.success {
            session.clear_current_cart();
            session.names_mut().clear();
            tracing::info!(cart = cart_id, "Cart cancelled");
        } else {
            tracing::warn!(cart = cart_id, "Commerce service declined to cancel cart");
        }

        Ok(ack)
    }

    /// Reactivate a previously suspended cart. On a successful ack the
    /// session points at exactly the requested cart id.
    pub async fn activate(
        &self,
        session: &mut OperatorSession,
        cart_id: i64,
    ) -> CartResult<AckResponse> {
        if cart_id < 1 {
            return Err(CartError::Validation("Cart ID is required".to_string()));
        }

        let body = ActivateBody {
            cart_id,
            user_id: session.user_id,
        };
        let ack = self.commerce.activate(session.token(), &body).await?;

        if ack.success {
            session.set_current_cart(cart_id);
            tracing::info!(cart = cart_id, "Cart activated");
        } else {
            tracing::warn!(cart = cart_id, "Commerce service declined to activate cart");
        }

        Ok(ack)
    }

    /// Finalize the current cart with payment details. Terminal: on a
    /// successful ack both the cart reference and the name cache are
    /// dropped. At least one payment entry is required.
    pub async fn finalize(
        &self,
        session: &mut OperatorSession,
        payload: FinalizePayload,
    ) -> CartResult<AckResponse> {
        let cart_id = session.current_cart_id().ok_or(CartError::NoActiveCart)?;

        let has_payment = payload.payments.as_ref().is_some_and(|p| !p.is_empty());
        if !has_payment {
            return Err(CartError::Validation(
                "Payment information is required".to_string(),
            ));
        }

        let body = payload.into_body(cart_id);
        let ack = self.commerce.finalize(session.token(), &body).await?;

        if ack.success {
            session.clear_current_cart();
            session.names_mut().clear();
            tracing::info!(cart = cart_id, "Cart finalized");
        } else {
            tracing::warn!(cart = cart_id, "Commerce service declined to finalize cart");
        }

        Ok(ack)
    }

    /// Look up a customer by card number, phone or similar identifier.
    /// Stateless pass-through; the reply shape belongs to the remote.
    pub async fn find_customer(
        &self,
        session: &OperatorSession,
        identifier: &str,
    ) -> CartResult<Value> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(CartError::Validation(
                "Customer identifier is required".to_string(),
            ));
        }

        let body = FindCustomerBody {
            identifier_value: identifier.to_string(),
        };
        let reply = self.commerce.find_customer(session.token(), &body).await?;
        Ok(reply)
    }

    /// Assemble the till display payload for the current cart.
    ///
    /// Without a cart reference no remote call is made and the empty
    /// payload comes back. Read-side lines carry ids only, so display
    /// names are reconciled from the session cache with deterministic
    /// placeholders, line totals are recomputed locally and totals are
    /// derived fresh. A 200 response without a cart payload renders as a
    /// referenced-but-unreadable cart, never as an error.
    pub async fn display_data(&self, session: &OperatorSession) -> CartResult<DisplayData> {
        let Some(cart_id) = session.current_cart_id() else {
            return Ok(DisplayData::empty());
        };

        let response = self.commerce.active_items(session.token(), cart_id).await?;

        let cart = match response.data {
            Some(payload) => {
                let items: Vec<CartLineView> = payload
                    .items
                    .iter()
                    .map(|line| CartLineView {
                        id: line.id,
                        product_id: line.product_id,
                        product_name: session.names().display_name(line.product_id),
                        unit_price: line.unit_price,
                        quantity: line.quantity,
                        shop_id: line.shop_id,
                        discount: line.discount,
                        added_at: line.added_at.clone(),
                        item_total: totals::line_total(line.unit_price, line.quantity),
                    })
                    .collect();

                CartView {
                    id: payload.id.or(Some(cart_id)),
                    status: payload.status,
                    user_id: payload.user_id,
                    created_at: payload.created_at,
                    items,
                }
            }
            None => CartView::missing(),
        };

        let computed = totals::compute(&cart.items);

        Ok(DisplayData {
            has_cart: true,
            cart: Some(cart),
            totals: computed,
        })
    }
}
