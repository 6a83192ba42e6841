//! Router assembly and middleware stack

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::GatewayState;
use crate::session;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<GatewayState> {
    Router::new()
        // POS API - session-scoped cart operations
        .merge(api::pos::router())
        // Health API - public route
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware and state
///
/// This is used by both the HTTP server and the integration tests.
pub fn build_app(state: &GatewayState) -> Router {
    build_router()
        // ========== Tower HTTP middleware ==========
        // CORS - the till UI may be served from a different origin
        .layer(CorsLayer::permissive())
        // Compression - gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Application middleware ==========
        // Request ID - generate a unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate the request ID to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Session resolution - executes before routes, injects the handle
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            session::resolve_session,
        ))
        .with_state(state.clone())
}
