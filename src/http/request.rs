//! The request handed to an adapter.
//!
//! # Responsibilities
//! - Carry the resolved target and merged options across the adapter boundary
//! - Erase the route's type tags so adapters deal only in plain values

use std::fmt;

use url::Url;

use crate::http::header::Headers;
use crate::http::options::{Options, Query};

/// Where the request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Fully qualified URL, resolved against the service host.
    Absolute(Url),
    /// Route path only; the service has no host and the adapter resolves it.
    Relative(String),
}

impl Target {
    /// Path component of the target (without leading slash for relative targets).
    pub fn path(&self) -> &str {
        match self {
            Target::Absolute(url) => url.path(),
            Target::Relative(path) => path,
        }
    }

    /// Resolve against `base`, leaving absolute targets untouched.
    pub fn resolve(&self, base: Option<&Url>) -> Option<Url> {
        match self {
            Target::Absolute(url) => Some(url.clone()),
            Target::Relative(path) => base.and_then(|b| b.join(path).ok()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Absolute(url) => write!(f, "{url}"),
            Target::Relative(path) => f.write_str(path),
        }
    }
}

/// A request as the adapter sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRequest {
    pub target: Target,
    pub headers: Option<Headers>,
    pub query: Option<Query>,
    pub body: Option<String>,
}

impl AdapterRequest {
    /// Build from a target and already-merged options.
    pub fn new(target: Target, options: Options) -> Self {
        Self {
            target,
            headers: options.headers,
            query: options.query,
            body: options.body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|h| h.get(name))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.as_ref().and_then(|q| q.get(key)).map(String::as_str)
    }
}
