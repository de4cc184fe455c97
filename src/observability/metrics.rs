//! Dispatch metrics.
//!
//! # Metrics
//! - `pathwise_dispatch_total` (counter): dispatches by method, endpoint, outcome
//! - `pathwise_dispatch_duration_seconds` (histogram): time from `call` to
//!   the caller's callback
//! - `pathwise_adapter_retries_total` (counter): extra attempts made by adapters
//!
//! # Design Decisions
//! - Labels are static strings, so recording never allocates label values
//! - Without an installed recorder every call is a no-op

use std::time::Instant;

use metrics::{counter, histogram};

use crate::http::Method;
use crate::routing::Endpoint;

/// Record one completed dispatch.
pub fn record_dispatch(method: Method, endpoint: Endpoint, outcome: &'static str, start: Instant) {
    let labels = [
        ("method", method.as_str()),
        ("endpoint", endpoint.as_str()),
        ("outcome", outcome),
    ];
    counter!("pathwise_dispatch_total", &labels[..]).increment(1);
    histogram!("pathwise_dispatch_duration_seconds", &labels[..]).record(start.elapsed().as_secs_f64());
}

/// Record an adapter retry.
pub fn record_retry(method: Method) {
    counter!("pathwise_adapter_retries_total", "method" => method.as_str()).increment(1);
}
