//! Fault carrier and HTTP error responses.
//!
//! A [`Fault`] is the one handled failure class: anything raised while
//! processing a request and caught at the dispatch boundary. [`AppError`] is
//! how handlers surface failures to Axum; a `Handler` error records its fault
//! in the response extensions so the dispatch middleware can run it through
//! the hook's error translation.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::model::DataModel;

/// A request-processing failure caught at the dispatch boundary.
///
/// Carries a kind name (the machine-readable failure type), a human-readable
/// message, and an optional causal error. The cause is shared behind an `Arc`
/// so the fault can travel through response extensions.
#[derive(Clone)]
pub struct Fault {
    kind: &'static str,
    message: String,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl Fault {
    /// Creates a fault with no distinct cause.
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a fault wrapping a causal error.
    pub fn with_cause(
        kind: &'static str,
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Display form of the causal error, falling back to the fault's own
    /// display form when no distinct cause exists. A fault without a cause
    /// is treated as its own root cause, so this never fails.
    pub fn cause_description(&self) -> String {
        match &self.cause {
            Some(cause) => cause.to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .finish()
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c.as_ref() as &(dyn StdError + 'static))
    }
}

#[derive(Debug)]
pub enum AppError {
    /// A lifecycle hook refused the request; the model is the response body.
    Forbidden { model: DataModel },
    /// Business logic raised a fault; translated by the dispatch middleware.
    Handler { fault: Fault },
}

impl AppError {
    pub fn forbidden(model: DataModel) -> Self {
        Self::Forbidden { model }
    }

    pub fn handler(fault: Fault) -> Self {
        Self::Handler { fault }
    }
}

impl From<Fault> for AppError {
    fn from(fault: Fault) -> Self {
        Self::Handler { fault }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Forbidden { model } => {
                (StatusCode::FORBIDDEN, Json(model)).into_response()
            }
            AppError::Handler { fault } => {
                // Placeholder body; the dispatch middleware finds the fault in
                // the extensions and replaces the body with the translated
                // envelope. Requests outside the dispatch layer still get a
                // well-formed error document.
                let body = json!({
                    "error": {
                        "code": "internal_error",
                        "message": fault.message(),
                    }
                });
                let mut response =
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
                response.extensions_mut().insert(fault);
                response
            }
        }
    }
}
