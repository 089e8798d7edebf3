//! Sample handlers behind the lifecycle hook dispatch.
//!
//! These stand in for application business logic: `/echo` completes
//! normally, `/fail` raises a fault so the error-translation path is
//! reachable in production wiring, not just in tests.

use axum::{Json, extract::RawQuery};

use crate::error::{AppError, Fault};
use crate::model::{DataModel, DataWrapper};

/// Reflects the request parameters back as a model.
///
/// # Endpoint
///
/// `GET /echo?key=value&...`
///
/// Returns the query parameters as a JSON object in parameter order.
pub async fn echo_handler(RawQuery(query): RawQuery) -> Json<DataModel> {
    let envelope = DataWrapper::from_query(query.as_deref());
    Json(DataModel::from(envelope))
}

/// Always raises a request-processing fault.
///
/// # Endpoint
///
/// `GET /fail`
///
/// The dispatch middleware translates the fault through the hook; the client
/// receives the translated envelope with `errorMessage`, `errorCause`, and
/// `errorType` keys.
pub async fn fail_handler() -> Result<Json<DataModel>, AppError> {
    Err(AppError::handler(Fault::new(
        "EchoUnavailable",
        "echo backend rejected the request",
    )))
}
