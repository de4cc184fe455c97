//! Outcome envelopes.
//!
//! # Data Flow
//! ```text
//! adapter ─▶ AdapterResponse (raw bytes) ─▶ decoder ─▶ Response<R, K, V, T> ─▶ caller
//! ```
//!
//! Both envelopes have the same three shapes: empty, success, error.

use std::fmt;

use bytes::Bytes;

use crate::error::{Error, TransportError};
use crate::http::header::Headers;
use crate::routing::route::Route;

/// What an adapter reports for one request.
#[derive(Debug)]
pub enum AdapterResponse {
    /// Succeeded without a payload.
    Empty { headers: Headers },
    /// Succeeded with raw payload bytes.
    Success { body: Bytes, headers: Headers },
    /// Failed; the cause is passed through to the caller untouched.
    Error { error: TransportError, headers: Headers },
}

impl AdapterResponse {
    pub fn empty() -> Self {
        AdapterResponse::Empty {
            headers: Headers::new(),
        }
    }

    pub fn success(body: impl Into<Bytes>) -> Self {
        AdapterResponse::Success {
            body: body.into(),
            headers: Headers::new(),
        }
    }

    pub fn error(error: TransportError) -> Self {
        AdapterResponse::Error {
            error,
            headers: Headers::new(),
        }
    }

    /// Replace the response headers.
    pub fn with_headers(mut self, new_headers: Headers) -> Self {
        match &mut self {
            AdapterResponse::Empty { headers }
            | AdapterResponse::Success { headers, .. }
            | AdapterResponse::Error { headers, .. } => *headers = new_headers,
        }
        self
    }

    pub fn headers(&self) -> &Headers {
        match self {
            AdapterResponse::Empty { headers }
            | AdapterResponse::Success { headers, .. }
            | AdapterResponse::Error { headers, .. } => headers,
        }
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            AdapterResponse::Empty { .. } => "empty",
            AdapterResponse::Success { .. } => "success",
            AdapterResponse::Error { .. } => "error",
        }
    }
}

/// What the caller receives, typed to the route and its payload.
pub enum Response<R, K, V, T> {
    /// The request succeeded and returned no data.
    Empty {
        route: Route<R, K, V>,
        headers: Headers,
    },
    /// The request succeeded and the payload decoded.
    Success {
        route: Route<R, K, V>,
        payload: T,
        headers: Headers,
    },
    /// Construction, transport or decode failure.
    Error {
        route: Route<R, K, V>,
        error: Error,
        headers: Headers,
    },
}

impl<R, K, V, T> Response<R, K, V, T> {
    /// The route the request was made for.
    pub fn route(&self) -> &Route<R, K, V> {
        match self {
            Response::Empty { route, .. }
            | Response::Success { route, .. }
            | Response::Error { route, .. } => route,
        }
    }

    pub fn headers(&self) -> &Headers {
        match self {
            Response::Empty { headers, .. }
            | Response::Success { headers, .. }
            | Response::Error { headers, .. } => headers,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Response::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Response::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Response::Empty { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Response::Empty { .. } => "empty",
            Response::Success { .. } => "success",
            Response::Error { .. } => "error",
        }
    }

    /// Collapse into a `Result`, dropping the route and headers.
    ///
    /// `Ok(None)` is an empty response.
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self {
            Response::Empty { .. } => Ok(None),
            Response::Success { payload, .. } => Ok(Some(payload)),
            Response::Error { error, .. } => Err(error),
        }
    }
}

impl<R, K, V, T: fmt::Debug> fmt::Debug for Response<R, K, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Empty { route, headers } => f
                .debug_struct("Empty")
                .field("route", route)
                .field("headers", headers)
                .finish(),
            Response::Success { route, payload, headers } => f
                .debug_struct("Success")
                .field("route", route)
                .field("payload", payload)
                .field("headers", headers)
                .finish(),
            Response::Error { route, error, headers } => f
                .debug_struct("Error")
                .field("route", route)
                .field("error", error)
                .field("headers", headers)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_response_headers() {
        let headers: Headers = [("ETag", "abc")].into_iter().collect();
        let response = AdapterResponse::success("{}").with_headers(headers.clone());
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.outcome(), "success");
        assert_eq!(AdapterResponse::empty().outcome(), "empty");
        assert_eq!(AdapterResponse::error(TransportError::Abandoned).outcome(), "error");
    }
}
