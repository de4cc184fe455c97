//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - The host must parse as a URL that can carry paths
//! - Value ranges (timeouts > 0, attempts >= 1, base delay <= max delay)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service.host '{host}' is not a valid URL: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("service.host '{0}' cannot be used as a base URL")]
    HostNotBase(String),

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("retries.max_attempts must be at least 1")]
    NoAttempts,

    #[error("retries.base_delay_ms ({base}) exceeds retries.max_delay_ms ({max})")]
    DelayRange { base: u64, max: u64 },

    #[error("logging.filter must not be empty")]
    EmptyFilter,
}

/// Check a parsed config, collecting every problem.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(host) = &config.service.host {
        match Url::parse(host) {
            Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::HostNotBase(host.clone())),
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidHost {
                host: host.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if config.http.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "http.connect_timeout_secs",
        });
    }
    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "http.request_timeout_secs",
        });
    }

    let retries = &config.retries;
    if retries.max_attempts == 0 {
        errors.push(ValidationError::NoAttempts);
    }
    if retries.base_delay_ms > retries.max_delay_ms {
        errors.push(ValidationError::DelayRange {
            base: retries.base_delay_ms,
            max: retries.max_delay_ms,
        });
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_host_checks() {
        let mut config = ServiceConfig::default();
        config.service.host = Some("not a url".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidHost { .. }));

        config.service.host = Some("mailto:someone@example.com".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::HostNotBase("mailto:someone@example.com".into())]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.http.request_timeout_secs = 0;
        config.retries.base_delay_ms = 5000;
        config.logging.filter = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroTimeout {
            field: "http.request_timeout_secs"
        }));
        assert!(errors.contains(&ValidationError::EmptyFilter));
    }
}
