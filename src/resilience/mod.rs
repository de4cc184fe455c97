//! Resilience helpers used by transport adapters.
//!
//! # Data Flow
//! ```text
//! Adapter attempt fails:
//!     → retries.rs (is this method/status retryable? attempts left?)
//!     → backoff.rs (how long to wait before the next attempt)
//!     → attempt again, or report the last outcome
//! ```
//!
//! # Design Decisions
//! - The dispatcher never retries; only adapters consult this module
//! - Retries only for idempotent methods (GET, PUT, DELETE)
//! - Jittered exponential backoff, capped

pub mod backoff;
pub mod retries;

pub use backoff::calculate_backoff;
pub use retries::{is_retryable_status, RetryPolicy};
