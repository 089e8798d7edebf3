//! Lifecycle hook dispatch middleware.
//!
//! Drives the four-point hook contract around the business handler:
//!
//! 1. Builds a [`DataWrapper`] envelope from the query string
//! 2. Calls `pre_handle`; a non-pass model refuses the request with `403`
//! 3. Calls `authorize`; same refusal rule
//! 4. Runs the inner handler
//! 5. On success calls `log` once and returns the response unchanged
//! 6. On a recorded [`Fault`] calls `translate_error` and replaces the body
//!    with the translated envelope, preserving the status code
//!
//! A fault raised by `pre_handle` or `authorize` themselves goes straight to
//! error translation, skipping the handler.
//!
//! # Integration
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use gatehook::api::middleware::dispatch;
//!
//! let hooked = Router::new()
//!     .route("/echo", get(echo_handler))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), dispatch::layer));
//! ```

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::{AppError, Fault};
use crate::hook::RequestParts;
use crate::model::{DataModel, DataWrapper};
use crate::state::AppState;

pub async fn layer(
    State(st): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let parts = RequestParts::capture(&req, addr);
    let mut envelope = DataWrapper::from_query(req.uri().query());

    match st.hook.pre_handle(&mut envelope, &parts).await {
        Ok(model) if model.is_pass() => {}
        Ok(model) => return refuse(model),
        Err(fault) => return translate(&st, fault, envelope, &parts).await,
    }

    match st.hook.authorize(&mut envelope, &parts).await {
        Ok(model) if model.is_pass() => {}
        Ok(model) => return refuse(model),
        Err(fault) => return translate(&st, fault, envelope, &parts).await,
    }

    let response = next.run(req).await;

    if let Some(fault) = response.extensions().get::<Fault>().cloned() {
        let status = response.status();
        let translated = st.hook.translate_error(&fault, envelope, &parts).await;
        return (status, Json(translated)).into_response();
    }

    st.hook.log(&envelope, &parts).await;

    response
}

fn refuse(model: DataModel) -> Response {
    AppError::forbidden(model).into_response()
}

async fn translate(
    st: &AppState,
    fault: Fault,
    envelope: DataWrapper,
    parts: &RequestParts,
) -> Response {
    let translated = st.hook.translate_error(&fault, envelope, parts).await;
    (StatusCode::INTERNAL_SERVER_ERROR, Json(translated)).into_response()
}
