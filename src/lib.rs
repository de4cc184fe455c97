//! Typed routing and request dispatch for REST-style APIs.
//!
//! # Architecture
//! ```text
//! Resource descriptor (routing::resource)
//!     → capability constructors (Post::list(), Post::show(2), ...)
//!     → composition (Post::show(2) / Comment::list())
//!     → Service::call(route, options, callback)
//!         → defaults merged beneath call options (http::options)
//!         → Adapter::perform(method, AdapterRequest, Completion)
//!         → decoder for the route's resource and cardinality
//!     → Response<R, K, V, T> delivered exactly once
//! ```
//!
//! # Example
//! ```
//! use pathwise::adapter::{MockAdapter, MockReply};
//! use pathwise::http::Method;
//! use pathwise::prelude::*;
//! use pathwise::routing::fixtures::{Comment, Post};
//!
//! let adapter = MockAdapter::new().on(
//!     Method::Get,
//!     "posts/2/comments",
//!     MockReply::json(&serde_json::json!([{"id": 12, "body": "first"}])),
//! );
//! let service = Service::builder(adapter).host("https://api.example.com")?.build();
//!
//! service.call_default(Post::show(2) / Comment::list(), |response| {
//!     let comments = response.payload().expect("mock answers inline");
//!     assert_eq!(comments[0].id, 12);
//! });
//! # Ok::<(), pathwise::error::BuildError>(())
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod service;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use service::Service;

/// The names most callers need.
pub mod prelude {
    pub use crate::adapter::Adapter;
    pub use crate::error::{DecodeError, Error, TransportError};
    pub use crate::http::{Header, Headers, Options, Response};
    pub use crate::routing::{
        CreateRoute, DeleteRoute, Identifiable, ListRoute, Listable, ReplaceRoute, Resource, Root, ShowRoute,
        Singleton, SingletonRoute, Under, UpdateRoute,
    };
    pub use crate::service::{Reply, Service};
}
