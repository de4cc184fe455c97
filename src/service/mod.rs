//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Route<R, K, V> + call Options
//!     → dispatcher.rs (resolve target against host, merge defaults)
//!     → Adapter::perform(method, AdapterRequest, Completion)
//!     → completion.rs (one-shot, exactly one outcome)
//!     → dispatcher.rs (decode with R's decoder, wrap in Response)
//!     → caller's callback
//! ```
//!
//! # Design Decisions
//! - `Service` is immutable after construction and cheap to clone
//! - Every failure reaches the callback as `Response::Error`; nothing is
//!   returned across `call`
//! - Only legal (cardinality, verb) pairs implement `Dispatch`

pub mod builder;
pub mod completion;
pub mod dispatcher;

pub use builder::ServiceBuilder;
pub use completion::Completion;
pub use dispatcher::{Dispatch, Reply, Service};
