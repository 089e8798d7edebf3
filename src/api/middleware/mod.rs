//! HTTP middleware for request processing.
//!
//! Provides access logging, lifecycle hook dispatch, and observability
//! middleware.

pub mod access_log;
pub mod dispatch;
pub mod tracing;
