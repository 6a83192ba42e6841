//! Typed commerce API surface
//!
//! One method per remote cart operation. The orchestrator depends on this
//! trait, not on the concrete HTTP client, so tests can substitute a
//! scripted implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, ClientResult, HttpClient};
use shared::commerce::{
    AckResponse, ActivateBody, ActiveItemsResponse, AdjustBody, CancelBody, FindCustomerBody,
    FinalizeBody, ScanBody, ScanResponse, SuspendBody,
};

/// Remote cart operations consumed by the orchestrator.
///
/// `token` is the calling session's bearer token; `None` falls back to the
/// client's configured default.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Scan a barcode: creates a cart if none is active and appends or
    /// increments a line.
    async fn scan(&self, token: Option<&str>, body: &ScanBody) -> ClientResult<ScanResponse>;

    /// Read the active items of a cart.
    async fn active_items(
        &self,
        token: Option<&str>,
        cart_id: i64,
    ) -> ClientResult<ActiveItemsResponse>;

    /// Apply a signed quantity delta to one cart line.
    async fn adjust_line(
        &self,
        token: Option<&str>,
        line_item_id: i64,
        body: &AdjustBody,
    ) -> ClientResult<Value>;

    /// Suspend a cart for later reactivation.
    async fn suspend(&self, token: Option<&str>, body: &SuspendBody) -> ClientResult<AckResponse>;

    /// Cancel a cart. Terminal.
    async fn cancel(
        &self,
        token: Option<&str>,
        cart_id: i64,
        body: &CancelBody,
    ) -> ClientResult<AckResponse>;

    /// Reactivate a previously suspended cart.
    async fn activate(&self, token: Option<&str>, body: &ActivateBody)
    -> ClientResult<AckResponse>;

    /// Finalize a cart with payment details. Terminal.
    async fn finalize(&self, token: Option<&str>, body: &FinalizeBody)
    -> ClientResult<AckResponse>;

    /// Look up a customer by an identifier (card number, phone, ...).
    async fn find_customer(
        &self,
        token: Option<&str>,
        body: &FindCustomerBody,
    ) -> ClientResult<Value>;

    /// Probe the commerce service's health endpoint.
    async fn health(&self, token: Option<&str>) -> ClientResult<Value>;
}

fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl CommerceApi for HttpClient {
    async fn scan(&self, token: Option<&str>, body: &ScanBody) -> ClientResult<ScanResponse> {
        // Registered with a trailing slash on the commerce side.
        decode(self.post("api/cart/scan/", body, token).await?)
    }

    async fn active_items(
        &self,
        token: Option<&str>,
        cart_id: i64,
    ) -> ClientResult<ActiveItemsResponse> {
        decode(
            self.get(&format!("api/cart/{}/active-items", cart_id), token)
                .await?,
        )
    }

    async fn adjust_line(
        &self,
        token: Option<&str>,
        line_item_id: i64,
        body: &AdjustBody,
    ) -> ClientResult<Value> {
        self.patch(&format!("api/cart/items/{}", line_item_id), body, token)
            .await
    }

    async fn suspend(&self, token: Option<&str>, body: &SuspendBody) -> ClientResult<AckResponse> {
        decode(self.patch("api/cart/suspend", body, token).await?)
    }

    async fn cancel(
        &self,
        token: Option<&str>,
        cart_id: i64,
        body: &CancelBody,
    ) -> ClientResult<AckResponse> {
        decode(
            self.patch(&format!("api/cart/cancel/{}", cart_id), body, token)
                .await?,
        )
    }

    async fn activate(
        &self,
        token: Option<&str>,
        body: &ActivateBody,
    ) -> ClientResult<AckResponse> {
        decode(self.patch("api/cart/activate", body, token).await?)
    }

    async fn finalize(
        &self,
        token: Option<&str>,
        body: &FinalizeBody,
    ) -> ClientResult<AckResponse> {
        decode(self.post("api/cart/finalize", body, token).await?)
    }

    async fn find_customer(
        &self,
        token: Option<&str>,
        body: &FindCustomerBody,
    ) -> ClientResult<Value> {
        self.post("api/customer/find", body, token).await
    }

    async fn health(&self, token: Option<&str>) -> ClientResult<Value> {
        self.get("api/health", token).await
    }
}
