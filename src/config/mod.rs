//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → Service::from_config / ReqwestAdapter::from_config / init_logging
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Service defaults are an `Options` value, deserialized directly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{HttpConfig, LogFormat, LoggingConfig, RetryConfig, ServiceConfig, ServiceSection};
pub use validation::{validate_config, ValidationError};
