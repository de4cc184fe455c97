//! Programmable in-process adapter.
//!
//! # Responsibilities
//! - Answer requests with canned replies keyed by `(Method, path)`
//! - Record every request it receives, in arrival order
//! - Complete inline, or from a spawned thread to exercise cross-thread delivery
//!
//! # Design Decisions
//! - Paths are matched without their leading `/`. A key also matches any
//!   target path that ends in it on a segment boundary, so `"posts/2"`
//!   matches `Target::Relative("posts/2")`, `http://host/posts/2` and
//!   `http://host/v1/posts/2`, but not `http://host/reposts/2`
//! - The exact path wins over a suffix match; among suffix matches the
//!   longest key wins
//! - Unmatched requests get the fallback reply (empty by default)

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::thread;

use bytes::Bytes;
use serde::Serialize;

use crate::adapter::Adapter;
use crate::error::TransportError;
use crate::http::{AdapterRequest, AdapterResponse, Headers, Method};
use crate::service::Completion;

#[derive(Debug, Clone)]
enum ReplyKind {
    Empty,
    Success(Bytes),
    Status { status: u16, body: String },
    Failure(String),
    Drop,
}

/// A canned answer.
#[derive(Debug, Clone)]
pub struct MockReply {
    kind: ReplyKind,
    headers: Headers,
}

impl MockReply {
    fn of(kind: ReplyKind) -> Self {
        Self {
            kind,
            headers: Headers::new(),
        }
    }

    /// Success without a payload.
    pub fn empty() -> Self {
        Self::of(ReplyKind::Empty)
    }

    /// Success with raw bytes.
    pub fn bytes(body: impl Into<Bytes>) -> Self {
        Self::of(ReplyKind::Success(body.into()))
    }

    /// Success with a text payload.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes(body.into())
    }

    /// Success with `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::bytes(body),
            Err(e) => Self::failure(format!("mock reply is not serializable: {e}")),
        }
    }

    /// `TransportError::Status`.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::of(ReplyKind::Status {
            status,
            body: body.into(),
        })
    }

    /// `TransportError::Other` with `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::of(ReplyKind::Failure(message.into()))
    }

    /// Drop the completion without answering.
    pub fn dropped() -> Self {
        Self::of(ReplyKind::Drop)
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    fn into_response(self) -> Option<AdapterResponse> {
        let response = match self.kind {
            ReplyKind::Empty => AdapterResponse::empty(),
            ReplyKind::Success(body) => AdapterResponse::success(body),
            ReplyKind::Status { status, body } => {
                AdapterResponse::error(TransportError::Status { status, body })
            }
            ReplyKind::Failure(message) => AdapterResponse::error(TransportError::other(message)),
            ReplyKind::Drop => return None,
        };
        Some(response.with_headers(self.headers))
    }
}

/// Adapter that answers from a table instead of the network.
#[derive(Debug)]
pub struct MockAdapter {
    replies: HashMap<(Method, String), MockReply>,
    fallback: MockReply,
    threaded: bool,
    requests: Mutex<Vec<(Method, AdapterRequest)>>,
}

impl Default for MockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdapter {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            fallback: MockReply::empty(),
            threaded: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer `method path` with `reply`.
    pub fn on(mut self, method: Method, path: &str, reply: MockReply) -> Self {
        self.replies
            .insert((method, path.trim_start_matches('/').to_string()), reply);
        self
    }

    /// Answer unmatched requests with `reply`.
    pub fn fallback(mut self, reply: MockReply) -> Self {
        self.fallback = reply;
        self
    }

    /// Complete from a freshly spawned thread instead of inline.
    pub fn threaded(mut self) -> Self {
        self.threaded = true;
        self
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<(Method, AdapterRequest)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reply_for(&self, method: Method, request: &AdapterRequest) -> MockReply {
        let path = request.target.path().trim_start_matches('/');
        if let Some(reply) = self.replies.get(&(method, path.to_string())) {
            return reply.clone();
        }

        self.replies
            .iter()
            .filter(|((m, key), _)| *m == method && ends_with_segments(path, key))
            .max_by_key(|((_, key), _)| key.len())
            .map(|(_, reply)| reply)
            .unwrap_or(&self.fallback)
            .clone()
    }
}

/// True if `path` ends with `/` followed by `key`.
fn ends_with_segments(path: &str, key: &str) -> bool {
    !key.is_empty()
        && path
            .strip_suffix(key)
            .is_some_and(|prefix| prefix.ends_with('/'))
}

impl Adapter for MockAdapter {
    fn perform(&self, method: Method, request: AdapterRequest, completion: Completion) {
        let reply = self.reply_for(method, &request);
        tracing::trace!(method = %method, target = %request.target, "Mock adapter answering");
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((method, request));

        let answer = move || match reply.into_response() {
            Some(response) => completion.complete(response),
            None => drop(completion),
        };

        if self.threaded {
            thread::spawn(answer);
        } else {
            answer();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Options, Target};
    use std::sync::mpsc;
    use url::Url;

    fn request(path: &str) -> AdapterRequest {
        AdapterRequest::new(Target::Relative(path.into()), Options::default())
    }

    fn perform(adapter: &MockAdapter, method: Method, path: &str) -> AdapterResponse {
        let (tx, rx) = mpsc::channel();
        adapter.perform(
            method,
            request(path),
            Completion::new(move |response| {
                tx.send(response).unwrap();
            }),
        );
        rx.recv().unwrap()
    }

    #[test]
    fn test_matches_method_and_path() {
        let adapter = MockAdapter::new()
            .on(Method::Get, "/posts", MockReply::text("[]"))
            .fallback(MockReply::status(404, "missing"));

        assert_eq!(perform(&adapter, Method::Get, "posts").outcome(), "success");
        assert!(matches!(
            perform(&adapter, Method::Delete, "posts"),
            AdapterResponse::Error {
                error: TransportError::Status { status: 404, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_matches_beneath_host_path() {
        let adapter = MockAdapter::new()
            .on(Method::Get, "albums", MockReply::text("[]"))
            .on(Method::Get, "v2/albums/1", MockReply::empty())
            .fallback(MockReply::status(404, "missing"));
        let host = Url::parse("https://music.test/v2/").unwrap();
        let outcome = |method: Method, path: &str| {
            let target = Target::Absolute(host.join(path).unwrap());
            adapter
                .reply_for(method, &AdapterRequest::new(target, Options::default()))
                .into_response()
                .map(|response| response.outcome())
        };

        assert_eq!(outcome(Method::Get, "albums"), Some("success"));
        assert_eq!(outcome(Method::Get, "albums/1"), Some("empty"));
        assert_eq!(outcome(Method::Get, "subalbums"), Some("error"));
        assert_eq!(outcome(Method::Post, "albums"), Some("error"));
    }

    #[test]
    fn test_ends_with_segments() {
        assert!(ends_with_segments("v2/albums", "albums"));
        assert!(ends_with_segments("api/v2/albums/3", "albums/3"));
        assert!(!ends_with_segments("albums", "albums"));
        assert!(!ends_with_segments("v2/subalbums", "albums"));
        assert!(!ends_with_segments("v2/albums", ""));
    }

    #[test]
    fn test_records_requests_in_order() {
        let adapter = MockAdapter::new();
        perform(&adapter, Method::Get, "a");
        perform(&adapter, Method::Post, "b");

        let requests = adapter.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].0, Method::Get);
        assert_eq!(requests[1].1.target.path(), "b");
    }

    #[test]
    fn test_threaded_and_dropped() {
        let adapter = MockAdapter::new().fallback(MockReply::dropped()).threaded();
        assert!(matches!(
            perform(&adapter, Method::Get, "x"),
            AdapterResponse::Error {
                error: TransportError::Abandoned,
                ..
            }
        ));
    }

    #[test]
    fn test_reply_headers() {
        let headers: Headers = [("ETag", "v1")].into_iter().collect();
        let adapter = MockAdapter::new().fallback(MockReply::empty().with_headers(headers));
        let response = perform(&adapter, Method::Get, "x");
        assert_eq!(response.headers().get("etag"), Some("v1"));
    }
}
