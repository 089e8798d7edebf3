//! Shipped lifecycle hook variant.
//!
//! `PassHook` grants every request with a constant `{"PASS": "Y"}` model and
//! delegates its logging step to an injected collaborator. It is the
//! placeholder an application replaces once real pre-processing and
//! authorization rules exist.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Fault;
use crate::hook::{LifecycleHook, RequestParts};
use crate::model::{DataModel, DataWrapper};

/// Envelope key carrying the fault's message after error translation.
pub const ERROR_MESSAGE_KEY: &str = "errorMessage";
/// Envelope key carrying the causal error's display form.
pub const ERROR_CAUSE_KEY: &str = "errorCause";
/// Envelope key carrying the fault's kind name.
pub const ERROR_TYPE_KEY: &str = "errorType";

/// Logging collaborator for the hook's `log` step.
///
/// Passed to [`PassHook::new`] explicitly; the hook holds no global logger
/// state.
#[cfg_attr(test, mockall::automock)]
pub trait HookLogger: Send + Sync {
    /// Records one entry for a completed request.
    fn record(&self, envelope: &DataWrapper, request: &RequestParts);
}

/// Logger emitting through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl HookLogger for TracingLogger {
    fn record(&self, envelope: &DataWrapper, request: &RequestParts) {
        tracing::info!(
            method = %request.method(),
            path = %request.path(),
            params = envelope.len(),
            "request handled"
        );
    }
}

/// Lifecycle hook that grants everything.
pub struct PassHook {
    logger: Arc<dyn HookLogger>,
}

impl PassHook {
    pub fn new(logger: Arc<dyn HookLogger>) -> Self {
        Self { logger }
    }
}

impl Default for PassHook {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger))
    }
}

#[async_trait]
impl LifecycleHook for PassHook {
    async fn pre_handle(
        &self,
        _envelope: &mut DataWrapper,
        _request: &RequestParts,
    ) -> Result<DataModel, Fault> {
        // Pre-processing goes here once the application defines any.
        Ok(DataModel::pass())
    }

    async fn authorize(
        &self,
        _envelope: &mut DataWrapper,
        _request: &RequestParts,
    ) -> Result<DataModel, Fault> {
        // Real deployments would derive this from session authorities.
        Ok(DataModel::pass())
    }

    async fn log(&self, envelope: &DataWrapper, request: &RequestParts) {
        self.logger.record(envelope, request);
    }

    async fn translate_error(
        &self,
        fault: &Fault,
        mut envelope: DataWrapper,
        _request: &RequestParts,
    ) -> DataWrapper {
        envelope.put(ERROR_MESSAGE_KEY, fault.message());
        // A fault without a distinct cause stands in as its own root cause.
        envelope.put(ERROR_CAUSE_KEY, fault.cause_description());
        envelope.put(ERROR_TYPE_KEY, fault.kind());
        envelope
    }
}
