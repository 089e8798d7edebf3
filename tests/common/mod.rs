#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::connect_info::MockConnectInfo;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gatehook::api::handlers::{echo_handler, fail_handler, health_handler};
use gatehook::api::middleware::{access_log, dispatch};
use gatehook::prelude::*;

/// Peer address injected for every test request.
pub fn test_addr() -> SocketAddr {
    SocketAddr::from(([10, 1, 2, 3], 40000))
}

/// Builds a test server with the full route/middleware wiring around the
/// given hook.
pub fn test_server(hook: Arc<dyn LifecycleHook>) -> TestServer {
    build_server(hook, false)
}

/// Same wiring, with the access logger trusting forwarding headers.
pub fn proxied_test_server(hook: Arc<dyn LifecycleHook>) -> TestServer {
    build_server(hook, true)
}

fn build_server(hook: Arc<dyn LifecycleHook>, behind_proxy: bool) -> TestServer {
    let state = AppState::new(hook);

    let hooked = Router::new()
        .route("/echo", get(echo_handler))
        .route("/fail", get(fail_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            dispatch::layer,
        ));

    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(hooked)
        .with_state(state)
        .layer(middleware::from_fn(
            move |connect_info: ConnectInfo<SocketAddr>, req: Request, next: Next| {
                access_log::layer(behind_proxy, connect_info, req, next)
            },
        ))
        .layer(MockConnectInfo(test_addr()));

    TestServer::new(app).unwrap()
}

/// Logging collaborator that counts `record` calls.
#[derive(Default)]
pub struct CountingLogger {
    calls: AtomicUsize,
}

impl CountingLogger {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HookLogger for CountingLogger {
    fn record(&self, _envelope: &DataWrapper, _request: &RequestParts) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hook that refuses every request at the authorization step.
pub struct DenyingHook;

#[async_trait]
impl LifecycleHook for DenyingHook {
    async fn pre_handle(
        &self,
        _envelope: &mut DataWrapper,
        _request: &RequestParts,
    ) -> Result<DataModel, Fault> {
        Ok(DataModel::pass())
    }

    async fn authorize(
        &self,
        _envelope: &mut DataWrapper,
        _request: &RequestParts,
    ) -> Result<DataModel, Fault> {
        Ok(DataModel::deny())
    }

    async fn log(&self, _envelope: &DataWrapper, _request: &RequestParts) {}

    async fn translate_error(
        &self,
        _fault: &Fault,
        envelope: DataWrapper,
        _request: &RequestParts,
    ) -> DataWrapper {
        envelope
    }
}
