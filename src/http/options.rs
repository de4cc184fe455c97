//! Per-request options and their merge rules.
//!
//! # Data Flow
//! ```text
//! Service defaults (base) ─┐
//!                          ├─▶ merge (override wins) ─▶ AdapterRequest
//! Call options (override) ─┘
//! ```
//!
//! # Design Decisions
//! - Each field merges independently; an absent side yields the other side
//! - Headers: non-colliding base entries, then all override entries
//! - Query: base entries with override keys replaced or added
//! - Body: override body if present, else base body

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::header::{Header, Headers};

/// Query string parameters. The adapter encodes them onto the URL.
pub type Query = BTreeMap<String, String>;

/// Headers, query string and body for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub headers: Option<Headers>,
    pub query: Option<Query>,
    pub body: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed header.
    pub fn header(mut self, header: Header) -> Self {
        self.headers.get_or_insert_with(Headers::new).set(header);
        self
    }

    /// Add a raw header.
    pub fn raw_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.get_or_insert_with(Headers::new).insert(name, value);
        self
    }

    /// Add a query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Query::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_none() && self.query.is_none() && self.body.is_none()
    }

    /// Merge `overrides` on top of `self`.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            headers: merge_field(self.headers.as_ref(), overrides.headers.as_ref(), Headers::merged_with),
            query: merge_field(self.query.as_ref(), overrides.query.as_ref(), merge_query),
            body: overrides.body.clone().or_else(|| self.body.clone()),
        }
    }
}

/// Whole-value merge where either side may be missing.
pub fn merge_optional(base: Option<&Options>, overrides: Option<&Options>) -> Option<Options> {
    merge_field(base, overrides, Options::merge)
}

fn merge_field<T: Clone>(base: Option<&T>, overrides: Option<&T>, op: impl Fn(&T, &T) -> T) -> Option<T> {
    match (base, overrides) {
        (Some(base), Some(overrides)) => Some(op(base, overrides)),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}

fn merge_query(base: &Query, overrides: &Query) -> Query {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Options {
        Options::new()
            .raw_header("Accept", "application/json")
            .header(Header::BearerAuth("t0k3n".into()))
            .query_param("page", "1")
            .query_param("per_page", "20")
            .body("{}")
    }

    #[test]
    fn test_merge_is_idempotent() {
        let options = sample();
        assert_eq!(options.merge(&options), options);
    }

    #[test]
    fn test_merge_headers_override_wins() {
        let base = Options::new().raw_header("A", "1").raw_header("B", "2");
        let call = Options::new().raw_header("B", "3").raw_header("C", "4");
        let merged = base.merge(&call);
        let headers: Vec<_> = merged
            .headers
            .as_ref()
            .unwrap()
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            headers,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "3".to_string()),
                ("C".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_query_replaces_keys() {
        let base = Options::new().query_param("page", "1").query_param("sort", "asc");
        let call = Options::new().query_param("page", "2");
        let query = base.merge(&call).query.unwrap();
        assert_eq!(query.get("page").map(String::as_str), Some("2"));
        assert_eq!(query.get("sort").map(String::as_str), Some("asc"));
    }

    #[test]
    fn test_merge_body_prefers_override() {
        let base = Options::new().body("base");
        assert_eq!(base.merge(&Options::new().body("call")).body.as_deref(), Some("call"));
        assert_eq!(base.merge(&Options::new()).body.as_deref(), Some("base"));
    }

    #[test]
    fn test_merge_absent_fields_degrade() {
        let base = Options::new().raw_header("A", "1");
        let call = Options::new().query_param("q", "x");
        let merged = base.merge(&call);
        assert_eq!(merged.headers, base.headers);
        assert_eq!(merged.query, call.query);
        assert!(merged.body.is_none());
        assert!(Options::new().merge(&Options::new()).is_empty());
    }

    #[test]
    fn test_merge_optional() {
        let a = sample();
        assert_eq!(merge_optional(Some(&a), None), Some(a.clone()));
        assert_eq!(merge_optional(None, Some(&a)), Some(a.clone()));
        assert_eq!(merge_optional(None, None), None);
        assert_eq!(merge_optional(Some(&a), Some(&a)), Some(a));
    }
}
