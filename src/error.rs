//! Error types surfaced through `Response::Error`.
//!
//! # Taxonomy
//! - `Construction`: the request target could not be formed from host + path
//! - `Transport`: whatever the adapter reported, carried through unchanged
//! - `Decode`: the resource decoder rejected a success payload
//!
//! The dispatcher never returns these across its boundary; every failure is
//! delivered to the caller's callback as `Response::Error`.

use thiserror::Error;

/// Errors delivered to dispatch callers.
#[derive(Debug, Error)]
pub enum Error {
    /// The absolute target could not be resolved against the service host.
    #[error("cannot resolve path '{path}' against host '{host}': {source}")]
    Construction {
        path: String,
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// The adapter reported a failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The payload did not match the shape the resource expects.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// True if the failure came from the adapter.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// True if the failure came from a resource decoder.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// HTTP status reported by the server, if the transport failed on one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Failures reported by an adapter.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The HTTP client failed (connect, timeout, protocol).
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A relative target reached an adapter that has no base URL to resolve it.
    #[error("cannot resolve relative target '{0}'")]
    UnresolvedTarget(String),

    /// The adapter dropped the completion without reporting an outcome.
    #[error("adapter dropped the request without completing it")]
    Abandoned,

    /// Any other adapter-specific failure.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an arbitrary adapter error.
    pub fn other<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Other(error.into())
    }
}

/// Failures raised by resource decoders.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not valid JSON for the target type.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but failed a resource-specific check.
    #[error("invalid payload: {0}")]
    Invalid(String),
}

impl DecodeError {
    /// Build an `Invalid` error from any message.
    pub fn invalid(message: impl Into<String>) -> Self {
        DecodeError::Invalid(message.into())
    }
}

/// Failures while assembling a service or adapter.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The host is not a parseable URL.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// No tokio runtime to spawn requests on.
    #[error("no tokio runtime available; build inside a runtime or pass a handle")]
    NoRuntime,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for dispatch-level operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(TransportError::Status {
            status: 404,
            body: "missing".into(),
        });
        assert_eq!(err.to_string(), "transport error: server returned status 404");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_transport());

        let err = Error::from(DecodeError::invalid("no id"));
        assert_eq!(err.to_string(), "decode error: invalid payload: no id");
        assert!(err.is_decode());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_other_transport_error() {
        let err = TransportError::other("socket closed");
        assert_eq!(err.to_string(), "socket closed");
    }
}
