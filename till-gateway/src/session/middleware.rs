//! Session cookie middleware
//!
//! Resolves the operator session for every POS request and injects its
//! handle into the request extensions. Requests arriving with no cookie,
//! or a cookie naming a session that no longer exists, get a fresh session
//! and a Set-Cookie on the way out. Health probes are passed through
//! without touching the store.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::core::GatewayState;

/// Cookie carrying the operator session id.
pub const SESSION_COOKIE: &str = "till_session";

pub async fn resolve_session(
    State(state): State<GatewayState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Health probes carry no operator context; minting a session per
    // monitoring ping would only grow the store.
    if req.uri().path().starts_with("/api/health") {
        return next.run(req).await;
    }

    let requested = req
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(session_id_from_cookies);

    let (id, handle, created) = state.sessions().resolve(requested);
    req.extensions_mut().insert(handle);

    let mut response = next.run(req).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Pull the session id out of a Cookie header value.
fn session_id_from_cookies(header: &str) -> Option<Uuid> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
