//! Per-request trace id, visible to any code running inside the request task.
//!
//! `RequestTrace` sets the scope. Problem-details rendering reads it so the
//! error body and the `x-trace-id` header agree.

use std::future::Future;

use tokio::task_local;

/// Placeholder used outside a request scope (startup, background work, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current request's id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
