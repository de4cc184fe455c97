//! One-shot completion handle passed to adapters.
//!
//! # Design Decisions
//! - Consuming `complete` delivers the outcome; it cannot be called twice
//! - Dropping an uncompleted handle delivers `TransportError::Abandoned`, so
//!   every dispatch produces exactly one outcome even if an adapter loses it

use std::fmt;

use crate::error::TransportError;
use crate::http::AdapterResponse;

type Deliver = Box<dyn FnOnce(AdapterResponse) + Send + 'static>;

/// Receives the adapter's outcome for one request.
pub struct Completion {
    deliver: Option<Deliver>,
}

impl Completion {
    pub fn new<F>(deliver: F) -> Self
    where
        F: FnOnce(AdapterResponse) + Send + 'static,
    {
        Self {
            deliver: Some(Box::new(deliver)),
        }
    }

    /// Deliver the outcome.
    pub fn complete(mut self, response: AdapterResponse) {
        if let Some(deliver) = self.deliver.take() {
            deliver(response);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(deliver) = self.deliver.take() {
            tracing::warn!("Adapter dropped a completion without reporting an outcome");
            deliver(AdapterResponse::error(TransportError::Abandoned));
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.deliver.is_some())
            .finish()
    }
}
