//! The request-lifecycle hook contract.
//!
//! The dispatch middleware invokes a [`LifecycleHook`] at four fixed points
//! of request processing: pre-handling, authorization, post-handler logging,
//! and error translation. The crate ships exactly one variant,
//! [`PassHook`], which grants everything and delegates logging to an
//! injected [`HookLogger`].
//!
//! # Implementations
//!
//! - [`PassHook`] - constant grants, intended to be replaced by real logic
//! - Test mocks available with `cfg(test)`

pub mod pass_hook;

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::{HeaderMap, Method};
use std::net::SocketAddr;

use crate::error::Fault;
use crate::model::{DataModel, DataWrapper};

pub use pass_hook::{HookLogger, PassHook, TracingLogger};

/// Read-only snapshot of the raw request handed to every hook invocation.
///
/// Captured once by the dispatcher before the request body is consumed, so
/// hooks can inspect routing metadata without owning the request.
#[derive(Debug, Clone)]
pub struct RequestParts {
    method: Method,
    path: String,
    remote_addr: SocketAddr,
    headers: HeaderMap,
}

impl RequestParts {
    pub fn new(method: Method, path: impl Into<String>, remote_addr: SocketAddr) -> Self {
        Self {
            method,
            path: path.into(),
            remote_addr,
            headers: HeaderMap::new(),
        }
    }

    /// Snapshots an inbound request together with its peer address.
    pub fn capture(request: &Request, remote_addr: SocketAddr) -> Self {
        Self {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            remote_addr,
            headers: request.headers().clone(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Extension points invoked by the dispatcher at fixed points in request
/// processing.
///
/// Order per request: [`pre_handle`](Self::pre_handle), then
/// [`authorize`](Self::authorize), then the business handler, then
/// [`log`](Self::log) on success or [`translate_error`](Self::translate_error)
/// on fault. A non-pass model from the first two steps stops the request with
/// a refusal; an `Err` fault from them goes straight to error translation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LifecycleHook: Send + Sync {
    /// Pre-processing before authorization. Returning a non-pass model
    /// refuses the request with the model as body.
    async fn pre_handle(
        &self,
        envelope: &mut DataWrapper,
        request: &RequestParts,
    ) -> Result<DataModel, Fault>;

    /// Authorization decision. Same refusal rule as `pre_handle`.
    async fn authorize(
        &self,
        envelope: &mut DataWrapper,
        request: &RequestParts,
    ) -> Result<DataModel, Fault>;

    /// Post-handler logging. Side effect only; runs once per successful
    /// request, after the business handler.
    async fn log(&self, envelope: &DataWrapper, request: &RequestParts);

    /// Converts a caught fault into an error payload. The returned envelope
    /// becomes the error response body.
    async fn translate_error(
        &self,
        fault: &Fault,
        envelope: DataWrapper,
        request: &RequestParts,
    ) -> DataWrapper;
}
