//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Service::call / adapters produce:
//!     → tracing events (request_id, method, path, outcome)
//!     → metrics.rs (dispatch counter and latency histogram)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout), installed by binaries
//!     → whatever `metrics` recorder the application installs
//! ```
//!
//! # Design Decisions
//! - The library emits; it never installs an exporter on its own
//! - Every dispatch carries a UUID correlation id through its log events
//! - Metrics go through the `metrics` facade and are no-ops without a recorder

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
