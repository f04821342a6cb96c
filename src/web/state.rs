//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::backend::{BackendClient, BackendError};
use crate::config::Config;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the external backend API
    pub backend: Arc<BackendClient>,
    /// Configuration loaded at startup
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from a validated configuration
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;

        Ok(Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
