//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::api::error::ApiResult;
use crate::api::routes::page::PageRenderer;
use crate::ratings::RatingStore;
use crate::websocket::{HubConfig, SessionHub};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only rating table shared by every session
    pub store: Arc<RatingStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Live dashboard sessions
    pub hub: Arc<SessionHub>,
    /// Compiled page template
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Create a new AppState, compiling the page template once
    pub fn new(store: Arc<RatingStore>, config: ApiConfig) -> ApiResult<Self> {
        let hub = SessionHub::new(HubConfig {
            max_sessions: config.max_sessions,
        });

        Ok(Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
            hub: Arc::new(hub),
            pages: Arc::new(PageRenderer::new()?),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get live session count
    pub async fn session_count(&self) -> usize {
        self.hub.session_count().await
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum concurrent dashboard sessions
    pub max_sessions: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            max_sessions: HubConfig::default().max_sessions,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
