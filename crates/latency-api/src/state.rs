//! Shared application state for the latency API.
//!
//! The fixture catalog is static data, so the only thing handlers share is
//! bookkeeping for the status page: a service name, the start instant, and
//! a request counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The counter is the only mutable field and uses relaxed
/// atomics; it is informational and orders nothing.
#[derive(Debug)]
pub struct AppState {
    /// Name reported by `/health` and the status page.
    pub service_name: String,
    started_at: Instant,
    requests: AtomicU64,
}

impl AppState {
    /// Create state for a service with the given name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            started_at: Instant::now(),
            requests: AtomicU64::new(0),
        }
    }

    /// Count one served latency request. Returns the new total.
    pub fn record_request(&self) -> u64 {
        self.requests
            .fetch_add(1, Ordering::Relaxed)
            .saturating_add(1)
    }

    /// Total latency requests served so far.
    pub fn requests_served(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Time since the state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::server::DEFAULT_SERVICE_NAME)
    }
}
