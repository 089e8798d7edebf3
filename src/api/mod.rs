//! HTTP layer: handlers and middleware.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access logging, hook dispatch, and tracing middleware

pub mod handlers;
pub mod middleware;
