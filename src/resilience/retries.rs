//! Retry policy for adapter attempts.
//!
//! # Responsibilities
//! - Decide whether a failed attempt may be retried
//! - Bound the number of attempts
//! - Produce the delay before the next attempt
//!
//! # Design Decisions
//! - Never retry POST/PATCH (non-idempotent)
//! - Connection errors are always retryable for idempotent methods; only
//!   502/503/504 among statuses
//! - The policy is plain data so it can come straight from config

use std::time::Duration;

use crate::config::RetryConfig;
use crate::http::Method;
use crate::resilience::backoff::calculate_backoff;

/// Statuses worth another attempt: the upstream was unavailable, not wrong.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 502..=504)
}

/// How an adapter retries failed attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. 1 disables retries.
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    /// Whether attempt number `attempt` (1-based) that ended in `status`
    /// (or a connection failure when `None`) should be followed by another.
    pub fn should_retry(&self, method: Method, attempt: u32, status: Option<u16>) -> bool {
        if attempt >= self.max_attempts || !method.is_idempotent() {
            return false;
        }
        status.map_or(true, is_retryable_status)
    }

    /// Delay before the attempt following `attempt`.
    pub fn delay(&self, attempt: u32) -> Duration {
        calculate_backoff(attempt, self.base_delay_ms, self.max_delay_ms)
    }
}
