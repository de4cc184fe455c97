//! HTTP value types shared by the service and its adapters.
//!
//! # Data Flow
//! ```text
//! Options (defaults + call)
//!     → options.rs (override-wins merge)
//!     → request.rs (AdapterRequest: target + merged fields)
//!     → adapter performs the call
//!     → response.rs (AdapterResponse → Response<R, K, V, T>)
//! ```
//!
//! # Design Decisions
//! - Plain values only; no transport types leak into the core
//! - Header names are unique and case-insensitive, order is preserved

pub mod header;
pub mod method;
pub mod options;
pub mod request;
pub mod response;

pub use header::{Header, Headers};
pub use method::Method;
pub use options::{merge_optional, Options, Query};
pub use request::{AdapterRequest, Target};
pub use response::{AdapterResponse, Response};
