//! # gatehook
//!
//! A request-lifecycle gateway skeleton built with Axum.
//!
//! ## Architecture
//!
//! The crate is a set of extension seams wired into a running HTTP service:
//!
//! - **Hook Layer** ([`hook`]) - The four-point request lifecycle contract
//!   (pre-handle, authorize, log, translate-error) and the shipped
//!   pass-through variant
//! - **Model Layer** ([`model`]) - Request envelope, decision model, and the
//!   value-converter seam
//! - **API Layer** ([`api`]) - Handlers and middleware, including the access
//!   logger and the hook dispatcher
//!
//! ## Request flow
//!
//! Every inbound request passes through the access logger (always logs,
//! always continues), then hooked routes run `pre_handle` and `authorize`
//! before the handler, `log` after it, and `translate_error` when the
//! handler raises a fault.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod config;
pub mod error;
pub mod hook;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{AppError, Fault};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::{AppError, Fault};
    pub use crate::hook::{HookLogger, LifecycleHook, PassHook, RequestParts, TracingLogger};
    pub use crate::model::{DataModel, DataWrapper, DefaultConverter, ValueConverter};
    pub use crate::state::AppState;
}
