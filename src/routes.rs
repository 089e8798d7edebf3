//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Liveness check (public, outside hook dispatch)
//! - `GET /echo`   - Sample business handler (behind hook dispatch)
//! - `GET /fail`   - Sample failing handler (behind hook dispatch)
//! - `GET /ws`     - Default WebSocket echo upgrade
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Access log** - One `Access log: METHOD PATH ADDR` line per request
//! - **Dispatch** - Lifecycle hook invocation around `/echo` and `/fail`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{echo_handler, fail_handler, health_handler, ws_handler};
use crate::api::middleware::{access_log, dispatch, tracing};
use crate::state::AppState;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::routing::get;
use axum::{Router, middleware};
use std::net::SocketAddr;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The access logger wraps everything, so every request produces exactly one
/// access line regardless of whether it reaches a hooked route.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, the access logger reads client IPs from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let hooked = Router::new()
        .route("/echo", get(echo_handler))
        .route("/fail", get(fail_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            dispatch::layer,
        ));

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/ws", get(ws_handler))
        .merge(hooked)
        .with_state(state)
        .layer(middleware::from_fn(
            move |connect_info: ConnectInfo<SocketAddr>, req: Request, next: Next| {
                access_log::layer(behind_proxy, connect_info, req, next)
            },
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
