//! Transport adapters.
//!
//! # Data Flow
//! ```text
//! Service
//!     → Adapter::perform(method, AdapterRequest, Completion)
//!     → (adapter does the network work on its own schedule)
//!     → Completion::complete(AdapterResponse)   exactly once
//! ```
//!
//! # Design Decisions
//! - The core only sees this trait; authentication, content negotiation,
//!   caching, retries and wire encoding belong to the adapter
//! - `perform` must return promptly; completion may happen on any thread
//! - `client.rs` is a real HTTP transport on reqwest, `mock.rs` a programmable stand-in

pub mod client;
pub mod mock;

use std::sync::Arc;

use crate::http::{AdapterRequest, Method};
use crate::service::Completion;

pub use client::ReqwestAdapter;
pub use mock::{MockAdapter, MockReply};

/// Performs HTTP requests on behalf of a `Service`.
pub trait Adapter: Send + Sync + 'static {
    /// Issue `request` with `method`, reporting the outcome through `completion`.
    fn perform(&self, method: Method, request: AdapterRequest, completion: Completion);
}

impl<A: Adapter + ?Sized> Adapter for Arc<A> {
    fn perform(&self, method: Method, request: AdapterRequest, completion: Completion) {
        (**self).perform(method, request, completion)
    }
}

impl<A: Adapter + ?Sized> Adapter for Box<A> {
    fn perform(&self, method: Method, request: AdapterRequest, completion: Completion) {
        (**self).perform(method, request, completion)
    }
}
