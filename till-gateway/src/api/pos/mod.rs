//! Till-facing POS API
//!
//! # Route table
//!
//! | Path | Method | Effect |
//! |------|--------|--------|
//! | /api/pos/scan | POST | scan a barcode into the cart |
//! | /api/pos/cart | GET | current cart display payload |
//! | /api/pos/cart/item/increase | PATCH | line quantity +1 |
//! | /api/pos/cart/item/decrease | PATCH | line quantity -1 |
//! | /api/pos/cart/item/remove | DELETE | drive a line to zero |
//! | /api/pos/cart/suspend | POST | park the current cart |
//! | /api/pos/cart/cancel | POST | cancel the current cart |
//! | /api/pos/cart/activate | POST | reactivate a suspended cart |
//! | /api/pos/cart/finalize | POST | finalize with payments |
//! | /api/pos/customer/find | POST | customer lookup pass-through |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::GatewayState;

pub fn router() -> Router<GatewayState> {
    Router::new().nest("/api/pos", routes())
}

fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/scan", post(handler::scan))
        .route("/cart", get(handler::cart))
        .route("/cart/item/increase", patch(handler::increase_item))
        .route("/cart/item/decrease", patch(handler::decrease_item))
        .route("/cart/item/remove", delete(handler::remove_item))
        .route("/cart/suspend", post(handler::suspend))
        .route("/cart/cancel", post(handler::cancel))
        .route("/cart/activate", post(handler::activate))
        .route("/cart/finalize", post(handler::finalize))
        .route("/customer/find", post(handler::find_customer))
}
