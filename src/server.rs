//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::hook::PassHook;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Wires the shipped [`PassHook`] into the application state and serves the
/// router with per-connection peer addresses, which the access logger and
/// hook dispatch rely on.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or the
/// server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(Arc::new(PassHook::default()));

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
