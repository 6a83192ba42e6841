//! End-to-end tests through the assembled router
//!
//! Requests go through the full middleware stack (session cookie, request
//! id, the lot) against a scripted commerce backend, so these cover what a
//! till UI actually sees: reply shapes, the failure envelope and cookie
//! issuance.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::CartStatus;
use shared::commerce::{
    AckResponse, ActivateBody, ActiveItemsResponse, AdjustBody, CancelBody, CartPayload,
    FindCustomerBody, FinalizeBody, RemoteCartLine, ScanBody, ScanLine, ScanResponse, SuspendBody,
};
use till_client::{ClientError, ClientResult, CommerceApi};
use till_gateway::routes;
use till_gateway::{Config, GatewayState};

// ============================================================================
// Scripted commerce backend
// ============================================================================

/// Commerce stand-in returning pre-scripted responses. When `reject` is
/// set, every call fails with that status and message.
#[derive(Default)]
struct ScriptedCommerce {
    scan_response: Option<ScanResponse>,
    items_response: Option<ActiveItemsResponse>,
    ack: Option<AckResponse>,
    reject: Option<(u16, String)>,
}

impl ScriptedCommerce {
    fn rejection(&self) -> Option<ClientError> {
        self.reject
            .as_ref()
            .map(|(status, message)| ClientError::Rejected {
                status: *status,
                message: message.clone(),
            })
    }

    fn scripted_ack(&self) -> AckResponse {
        self.ack.clone().unwrap_or(AckResponse {
            success: true,
            message: None,
        })
    }
}

#[async_trait]
impl CommerceApi for ScriptedCommerce {
    async fn scan(&self, _token: Option<&str>, _body: &ScanBody) -> ClientResult<ScanResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.scan_response.clone().unwrap_or_default())
    }

    async fn active_items(
        &self,
        _token: Option<&str>,
        _cart_id: i64,
    ) -> ClientResult<ActiveItemsResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.items_response.clone().unwrap_or_default())
    }

    async fn adjust_line(
        &self,
        _token: Option<&str>,
        _line_item_id: i64,
        _body: &AdjustBody,
    ) -> ClientResult<Value> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(json!({"success": true}))
    }

    async fn suspend(
        &self,
        _token: Option<&str>,
        _body: &SuspendBody,
    ) -> ClientResult<AckResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.scripted_ack())
    }

    async fn cancel(
        &self,
        _token: Option<&str>,
        _cart_id: i64,
        _body: &CancelBody,
    ) -> ClientResult<AckResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.scripted_ack())
    }

    async fn activate(
        &self,
        _token: Option<&str>,
        _body: &ActivateBody,
    ) -> ClientResult<AckResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.scripted_ack())
    }

    async fn finalize(
        &self,
        _token: Option<&str>,
        _body: &FinalizeBody,
    ) -> ClientResult<AckResponse> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(self.scripted_ack())
    }

    async fn find_customer(
        &self,
        _token: Option<&str>,
        _body: &FindCustomerBody,
    ) -> ClientResult<Value> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(json!({"success": true, "data": null}))
    }

    async fn health(&self, _token: Option<&str>) -> ClientResult<Value> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        Ok(json!({"status": "ok"}))
    }
}

// ============================================================================
// Harness helpers
// ============================================================================

fn test_config() -> Config {
    Config {
        http_port: 0,
        api_base_url: "http://localhost:3000".into(),
        api_timeout_secs: 5,
        api_token: None,
        station_id: 4,
        user_id: 2,
        shop_id: 3,
        session_dir: None,
        environment: "test".into(),
    }
}

fn app_with(commerce: ScriptedCommerce) -> Router {
    let state = GatewayState::with_commerce(test_config(), Arc::new(commerce));
    routes::build_app(&state)
}

/// Scan response for cart 7: one Widget line at 9.99 x 2.
fn scripted_scan(cart_id: i64) -> ScanResponse {
    ScanResponse {
        cart_id: Some(cart_id),
        items: vec![ScanLine {
            item_id: Some(1),
            product_id: Some(42),
            product_name: Some("Widget".to_string()),
            unit_price: 9.99,
            quantity: 2,
        }],
    }
}

/// Active-items read for the same cart. Reads carry no product names.
fn scripted_items(cart_id: i64) -> ActiveItemsResponse {
    ActiveItemsResponse {
        success: true,
        data: Some(CartPayload {
            id: Some(cart_id),
            status: CartStatus::Active,
            user_id: Some(2),
            created_at: Some("2025-03-01T10:00:00Z".to_string()),
            items: vec![RemoteCartLine {
                id: Some(1),
                product_id: Some(42),
                unit_price: 9.99,
                quantity: 2,
                shop_id: Some(3),
                discount: 0.0,
                added_at: None,
            }],
        }),
    }
}

fn json_request(method: Method, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bare_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// The `name=value` pair of the session cookie, ready for a Cookie header.
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn scan_issues_a_cookie_and_the_cart_reads_back() {
    let app = app_with(ScriptedCommerce {
        scan_response: Some(scripted_scan(7)),
        items_response: Some(scripted_items(7)),
        ..Default::default()
    });

    // 1. First contact: scan without a cookie
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "3001234567890"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).expect("first contact must set the session cookie");
    assert!(cookie.starts_with("till_session="));

    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["cart_id"], json!(7));
    assert_eq!(body["items"][0]["product_name"], json!("Widget"));
    assert_eq!(body["items"][0]["item_total"], json!(19.98));

    // 2. Read the cart back with the issued cookie
    let response = app
        .clone()
        .oneshot(bare_request(Method::GET, "/api/pos/cart", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // Known session: no new cookie
    assert!(session_cookie(&response).is_none());

    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["has_cart"], json!(true));
    assert_eq!(body["cart"]["id"], json!(7));
    // The read endpoint sends ids only; the name came from the scan
    assert_eq!(body["cart"]["items"][0]["product_name"], json!("Widget"));
    assert_eq!(body["totals"]["subtotal"], json!(19.98));
    assert_eq!(body["totals"]["tax"], json!(4.0));
    assert_eq!(body["totals"]["total"], json!(23.98));
    assert_eq!(body["totals"]["item_count"], json!(2));
}

#[tokio::test]
async fn first_contact_without_a_cart_still_gets_a_session() {
    let app = app_with(ScriptedCommerce::default());

    let response = app
        .oneshot(bare_request(Method::GET, "/api/pos/cart", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_some());

    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["has_cart"], json!(false));
    assert!(body.get("cart").is_none());
    assert_eq!(body["totals"]["total"], json!(0.0));
}

#[tokio::test]
async fn scan_without_a_barcode_is_refused() {
    let app = app_with(ScriptedCommerce::default());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "   "}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Barcode is required"));
}

#[tokio::test]
async fn adjust_requires_an_item_id() {
    let app = app_with(ScriptedCommerce::default());

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/pos/cart/item/increase",
            json!({}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["message"], json!("Item ID is required"));
}

#[tokio::test]
async fn suspend_without_a_cart_is_refused() {
    let app = app_with(ScriptedCommerce::default());

    let response = app
        .oneshot(bare_request(Method::POST, "/api/pos/cart/suspend", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("No active cart"));
}

#[tokio::test]
async fn finalize_demands_payment_entries() {
    let app = app_with(ScriptedCommerce {
        scan_response: Some(scripted_scan(7)),
        ..Default::default()
    });

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "3001234567890"}),
            None,
        ))
        .await
        .unwrap();
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/pos/cart/finalize",
            json!({"payments": []}),
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["message"], json!("Payment information is required"));
}

#[tokio::test]
async fn remote_rejections_surface_as_gateway_failures() {
    let app = app_with(ScriptedCommerce {
        reject: Some((409, "Cart already finalized".to_string())),
        ..Default::default()
    });

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "3001234567890"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(true));
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("409"));
    assert!(message.contains("Cart already finalized"));
}

#[tokio::test]
async fn declined_suspend_passes_through_and_keeps_the_cart() {
    let app = app_with(ScriptedCommerce {
        scan_response: Some(scripted_scan(7)),
        items_response: Some(scripted_items(7)),
        ack: Some(AckResponse {
            success: false,
            message: Some("Cart is locked".to_string()),
        }),
        ..Default::default()
    });

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "3001234567890"}),
            None,
        ))
        .await
        .unwrap();
    let cookie = session_cookie(&response).unwrap();

    // The remote said no: 200, refusal body, session untouched
    let response = app
        .clone()
        .oneshot(bare_request(
            Method::POST,
            "/api/pos/cart/suspend",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Cart is locked"));

    let response = app
        .oneshot(bare_request(Method::GET, "/api/pos/cart", Some(&cookie)))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["has_cart"], json!(true));
}

#[tokio::test]
async fn suspending_clears_the_session_cart() {
    let app = app_with(ScriptedCommerce {
        scan_response: Some(scripted_scan(7)),
        items_response: Some(scripted_items(7)),
        ..Default::default()
    });

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/pos/scan",
            json!({"barcode": "3001234567890"}),
            None,
        ))
        .await
        .unwrap();
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .clone()
        .oneshot(bare_request(
            Method::POST,
            "/api/pos/cart/suspend",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));

    let response = app
        .oneshot(bare_request(Method::GET, "/api/pos/cart", Some(&cookie)))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["has_cart"], json!(false));
    assert!(body.get("cart").is_none());
}

#[tokio::test]
async fn health_answers_without_minting_a_session() {
    let app = app_with(ScriptedCommerce::default());

    let response = app
        .oneshot(bare_request(Method::GET, "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // Monitoring pings never carry operator context
    assert!(session_cookie(&response).is_none());

    let body = read_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["environment"], json!("test"));
    assert!(body["uptime_seconds"].is_number());
}
