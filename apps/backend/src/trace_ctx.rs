//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` wraps each request future in [`with_trace_id`], which lets
//! `AppError` bodies and the JSON extractor pick the id up without a handle
//! on the `HttpRequest`. Domain and service code never read it.

use std::future::Future;

use tokio::task_local;

/// Reported when no request scope is active (startup, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the enclosing request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Drive `future` with `trace_id` installed as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
