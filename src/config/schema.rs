//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::http::Options;

/// Root configuration for a service and its transport.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Where routes are resolved.
    pub service: ServiceSection,

    /// Options merged beneath every call's options.
    pub defaults: Options,

    /// HTTP transport settings.
    pub http: HttpConfig,

    /// Adapter retry settings.
    pub retries: RetryConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Service addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Base URL (e.g., "https://api.example.com/v1"). Unset means relative
    /// targets, resolved by the adapter.
    pub host: Option<String>,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total time for one attempt in seconds.
    pub request_timeout_secs: u64,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            user_agent: concat!("pathwise/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Total attempts, including the first.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g., "pathwise=debug,info"). `RUST_LOG` wins.
    pub filter: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert!(config.service.host.is_none());
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [service]
            host = "https://api.example.com/v1"

            [defaults.headers]
            Authorization = "Bearer abc"

            [defaults.query]
            per_page = "20"

            [http]
            connect_timeout_secs = 2
            request_timeout_secs = 10
            user_agent = "blog-cli"

            [retries]
            enabled = false

            [logging]
            filter = "pathwise=debug"
            format = "pretty"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.host.as_deref(), Some("https://api.example.com/v1"));
        let headers = config.defaults.headers.as_ref().unwrap();
        assert_eq!(headers.get("authorization"), Some("Bearer abc"));
        assert_eq!(
            config.defaults.query.as_ref().unwrap().get("per_page").map(String::as_str),
            Some("20")
        );
        assert_eq!(config.http.user_agent, "blog-cli");
        assert!(!config.retries.enabled);
        // Unset fields in a present section keep their defaults
        assert_eq!(config.retries.max_attempts, 3);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
