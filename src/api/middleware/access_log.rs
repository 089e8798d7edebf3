//! Access logging middleware.
//!
//! Emits exactly one log line per inbound request, before any business
//! logic runs:
//!
//! ```text
//! Access log: GET /echo 10.0.0.7:51432
//! ```
//!
//! With `behind_proxy` enabled the client address is read from the
//! `X-Forwarded-For` (first entry) or `X-Real-IP` header, falling back to
//! the peer socket address when neither is present.
//!
//! The request is never mutated and never short-circuited; this layer always
//! forwards to the next stage. Sink failures are not handled here and fall
//! through to the subscriber's own error handling.

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

pub async fn layer(
    behind_proxy: bool,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_addr(req.headers(), addr, behind_proxy);
    tracing::info!("Access log: {} {} {}", req.method(), req.uri().path(), client);

    next.run(req).await
}

/// Resolves the client address to log.
///
/// Forwarding headers are only trusted when `behind_proxy` is set; anyone
/// can send them, so honoring them on a directly exposed service would let
/// clients spoof the access log.
fn client_addr(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
            return real_ip.to_string();
        }
    }

    peer.to_string()
}
