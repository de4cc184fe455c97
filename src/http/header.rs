//! Request and response headers.
//!
//! # Design Decisions
//! - `Headers` is an ordered map: insertion order is kept, names are unique
//! - Names compare case-insensitively (HTTP field names are case-insensitive)
//! - Writing an existing name replaces its value in place (last write wins)

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The canonical headers, plus an escape hatch for anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Bearer token authorization, e.g. OAuth access tokens.
    ///
    /// Holds the bare token and renders as `Authorization: Bearer <token>`.
    /// A token that already carries the `Bearer ` scheme is sent unchanged.
    BearerAuth(String),
    /// Entity tag used for caching.
    ETag(String),
    /// Any other header as a raw name/value pair.
    Other(String, String),
}

impl Header {
    /// Custom header.
    pub fn other(name: impl Into<String>, value: impl Into<String>) -> Self {
        Header::Other(name.into(), value.into())
    }

    /// Render into a `(name, value)` pair.
    pub fn pair(&self) -> (String, String) {
        match self {
            Header::BearerAuth(token) => ("Authorization".to_string(), bearer_value(token)),
            Header::ETag(tag) => ("ETag".to_string(), tag.clone()),
            Header::Other(name, value) => (name.clone(), value.clone()),
        }
    }
}

fn bearer_value(token: &str) -> String {
    let scheme = "Bearer ";
    match token.get(..scheme.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(scheme) => token.to_string(),
        _ => format!("{scheme}{token}"),
    }
}

/// Ordered header map with unique, case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a header, replacing any value already stored under the same name.
    ///
    /// Returns the previous value, if any. A replaced header keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Set a typed header.
    pub fn set(&mut self, header: Header) -> Option<String> {
        let (name, value) = header.pair();
        self.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Override-wins merge.
    ///
    /// Base headers whose names the override does not mention come first, in
    /// base order, followed by every override header in override order.
    pub fn merged_with(&self, overrides: &Headers) -> Headers {
        let mut entries: Vec<(String, String)> = self
            .entries
            .iter()
            .filter(|(name, _)| !overrides.contains(name))
            .cloned()
            .collect();
        entries.extend(overrides.entries.iter().cloned());
        Headers { entries }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        iter.into_iter().map(|h| h.pair()).collect()
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HeadersVisitor)
    }
}

struct HeadersVisitor;

impl<'de> Visitor<'de> for HeadersVisitor {
    type Value = Headers;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of header names to string values")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Headers, M::Error> {
        let mut headers = Headers::new();
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
